use keyindex::{Record, RecordSet};
use rand::{distr::Alphanumeric, seq::SliceRandom, Rng, SeedableRng};

/// Generate `len` records over roughly `len / repeats` distinct keys, shuffled.
pub fn get_records(seed: u64, len: usize, repeats: usize, key_size: usize) -> RecordSet {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let distinct = (len / repeats.max(1)).max(1);
    let keys: Vec<String> = (0..distinct)
        .map(|_| {
            (&mut rng)
                .sample_iter(Alphanumeric)
                .map(char::from)
                .take(key_size)
                .collect()
        })
        .collect();
    let mut records: Vec<Record> = (0..len)
        .map(|idx| Record::new(keys[idx % distinct].as_str(), rng.random()))
        .collect();
    records.shuffle(&mut rng);
    records.into_iter().collect()
}

/// Pick `count` keys present in `records`.
pub fn get_targets(seed: u64, records: &RecordSet, count: usize) -> Vec<String> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let idx = rng.random_range(0..records.len());
            records.as_slice()[idx].key().to_owned()
        })
        .collect()
}

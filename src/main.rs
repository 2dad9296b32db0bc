use keyindex::{BalancedTree, Index, OrderedTree, ProbingHashTable, Record, RecordSet};
use tracing_subscriber::EnvFilter;

fn main() -> keyindex::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let records: RecordSet = ["m", "c", "d", "a", "b", "c", "x", "x"]
        .into_iter()
        .zip(1..)
        .map(|(key, payload)| Record::new(key, payload))
        .collect();

    let mut ordered = OrderedTree::new();
    ordered.insert_all(&records);
    let mut balanced = BalancedTree::new();
    balanced.insert_all(&records);
    let mut hashed = ProbingHashTable::sized_for(records.distinct_keys())?;
    hashed.insert_all(&records);

    print!("{balanced:?}");
    println!(
        "ordered: height {}, balanced: height {}, black height {}",
        ordered.height(),
        balanced.height(),
        balanced.validate()?,
    );
    println!(
        "hashed: {}/{} slots, {} collisions",
        hashed.occupied(),
        hashed.capacity(),
        hashed.collisions(),
    );
    for key in ["c", "x", "q"] {
        println!(
            "{key:?}: ordered {}, balanced {}, hashed {}",
            ordered.search(key).len(),
            balanced.search(key).len(),
            hashed.search(key).len(),
        );
    }
    Ok(())
}

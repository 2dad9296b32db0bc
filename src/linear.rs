use crate::{Index, Record};

/// The unindexed baseline: records kept in insertion order and scanned on every lookup.
#[derive(Debug, Clone, Default)]
pub struct LinearScan {
    records: Vec<Record>,
}

impl LinearScan {
    /// Create an empty scan.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl Index for LinearScan {
    fn insert(&mut self, record: Record) {
        self.records.push(record);
    }

    fn search(&self, key: &str) -> Vec<&Record> {
        self.records.iter().filter(|r| r.key() == key).collect()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

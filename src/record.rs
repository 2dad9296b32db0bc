use std::collections::HashSet;

/// A keyed record. Keys are not unique: many records may share one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    key: String,
    payload: i64,
}

impl Record {
    /// Create a record from a key and its payload.
    pub fn new(key: impl Into<String>, payload: i64) -> Self {
        Self {
            key: key.into(),
            payload,
        }
    }

    /// The lookup key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value carried with the key.
    #[must_use]
    pub const fn payload(&self) -> i64 {
        self.payload
    }
}

/// An ordered sequence of records that indexes are built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    /// Create an empty record set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record at the end of the set.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Get the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the set holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get an iterator over the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// View the records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    /// Count the distinct keys in the set.
    #[must_use]
    pub fn distinct_keys(&self) -> usize {
        self.records
            .iter()
            .map(Record::key)
            .collect::<HashSet<_>>()
            .len()
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;

    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

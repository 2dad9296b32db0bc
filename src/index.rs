use crate::Record;

/// A trait implemented by data structures that map keys to the records inserted under them.
pub trait Index {
    /// Adds a record to the index.
    fn insert(&mut self, record: Record);

    /// Returns the records the index holds for the given key. The result is empty when the key
    /// is absent.
    fn search(&self, key: &str) -> Vec<&Record>;

    /// Returns the number of records retained by the index.
    fn len(&self) -> usize;

    /// Returns `true` if the index retains no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts a copy of every record, in iteration order.
    fn insert_all<'a, I>(&mut self, records: I)
    where
        I: IntoIterator<Item = &'a Record>,
    {
        for record in records {
            self.insert(record.clone());
        }
    }
}

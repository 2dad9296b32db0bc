//! # Open-addressing hash table with linear probing.
//!
//! The table never grows. Once every slot is taken, records with new keys are dropped. A key
//! keeps the first record inserted under it; later records with the same key are discarded,
//! unlike the trees which keep them all.

use crate::{Error, Index, Record, Result};

/// The table capacity chosen by [`ProbingHashTable::sized_for`] is this many times the expected
/// number of records.
pub const LOAD_FACTOR_INVERSE: usize = 2;

const DJB2_SEED: u64 = 5381;

/// Compute the DJB2 hash of `bytes`: `h = h * 33 + byte`, starting from 5381, wrapping at 64 bits.
///
/// Bytes are added as unsigned values, so keys with non-ASCII bytes hash differently from
/// implementations that add a signed `char`.
#[must_use]
pub fn djb2(bytes: &[u8]) -> u64 {
    bytes.iter().fold(DJB2_SEED, |hash, &byte| {
        (hash << 5).wrapping_add(hash).wrapping_add(u64::from(byte))
    })
}

/// A fixed-capacity hash table resolving collisions by probing successive slots.
#[derive(Debug, Clone)]
pub struct ProbingHashTable {
    slots: Box<[Option<Record>]>,
    occupied: usize,
    collisions: usize,
    dropped: usize,
}

impl ProbingHashTable {
    /// Create a table with exactly `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroCapacity`] when `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            occupied: 0,
            collisions: 0,
            dropped: 0,
        })
    }

    /// Create a table sized for `len` records at a load factor of one half.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroCapacity`] when `len` is zero.
    pub fn sized_for(len: usize) -> Result<Self> {
        Self::with_capacity(len.saturating_mul(LOAD_FACTOR_INVERSE))
    }

    /// Get the home slot of `key`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn hash(&self, key: &str) -> usize {
        // The remainder is below the capacity, which is a usize.
        (djb2(key.as_bytes()) % self.slots.len() as u64) as usize
    }

    /// Get the record stored for `key`, which is the first one inserted with it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Record> {
        let home = self.hash(key);
        let mut idx = home;
        while let Some(record) = &self.slots[idx] {
            if record.key() == key {
                return Some(record);
            }
            idx = self.next_slot(idx);
            if idx == home {
                break;
            }
        }
        None
    }

    /// Get the number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Get the number of occupied slots.
    #[must_use]
    pub const fn occupied(&self) -> usize {
        self.occupied
    }

    /// Get the number of insertions that probed past their home slot, whether the record was placed
    /// or its key was already stored further along.
    #[must_use]
    pub const fn collisions(&self) -> usize {
        self.collisions
    }

    /// Get the number of records with new keys that were dropped because the table was full.
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.dropped
    }

    /// Get the fraction of occupied slots.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.occupied as f64 / self.slots.len() as f64
    }

    fn next_slot(&self, idx: usize) -> usize {
        (idx + 1) % self.slots.len()
    }
}

impl Index for ProbingHashTable {
    fn insert(&mut self, record: Record) {
        let home = self.hash(record.key());
        let mut idx = home;
        while let Some(existing) = &self.slots[idx] {
            if existing.key() == record.key() {
                tracing::trace!(key = record.key(), "duplicate key discarded");
                if idx != home {
                    self.collisions += 1;
                }
                return;
            }
            idx = self.next_slot(idx);
            if idx == home {
                tracing::debug!(
                    key = record.key(),
                    capacity = self.capacity(),
                    "table full, record dropped"
                );
                self.dropped += 1;
                return;
            }
        }
        if idx != home {
            self.collisions += 1;
        }
        self.slots[idx] = Some(record);
        self.occupied += 1;
    }

    fn search(&self, key: &str) -> Vec<&Record> {
        self.get(key).into_iter().collect()
    }

    fn len(&self) -> usize {
        self.occupied
    }
}

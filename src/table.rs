use std::cell::Cell;

use tracing::Level;

use crate::{
    error::{KeyFormatReason, TableError},
    snapshot::{SlotView, Snapshot},
    stats::Stats,
};

pub const DEFAULT_CAPACITY: usize = 10;

// Number of trailing key characters read by `hash`
const SUFFIX_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<V> {
    pub key: String,
    pub value: V,
}

type Bucket<V> = Vec<Entry<V>>;

/// What `insert` did with the pair it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The slot was empty and a new bucket was allocated for the entry.
    Created,
    /// The slot already held other keys; the entry was chained at the end.
    Appended,
    /// The key was already present; its value was overwritten in place.
    Replaced,
}

#[derive(Debug, Default)]
struct Counters {
    hits: Cell<usize>,
    misses: Cell<usize>,
    created: usize,
    appended: usize,
    replaced: usize,
}

/// A hash table with a fixed number of slots, resolving collisions by chaining.
///
/// Slots start out empty and get a bucket on their first insert. The table never
/// grows, rehashes or removes entries.
#[derive(Debug)]
pub struct FixedBucketTable<V> {
    slots: Vec<Option<Bucket<V>>>,
    len: usize,
    counters: Counters,
}

impl<V> Default for FixedBucketTable<V> {
    fn default() -> FixedBucketTable<V> {
        FixedBucketTable::empty(DEFAULT_CAPACITY)
    }
}

impl<V> FixedBucketTable<V> {
    pub fn new(capacity: usize) -> Result<FixedBucketTable<V>, TableError> {
        if capacity == 0 {
            return Err(TableError::Config(String::from(
                "capacity must be at least 1",
            )));
        }
        Ok(FixedBucketTable::empty(capacity))
    }

    fn empty(capacity: usize) -> FixedBucketTable<V> {
        FixedBucketTable {
            slots: (0..capacity).map(|_| None).collect(),
            len: 0,
            counters: Counters::default(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of entries stored across all buckets.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maps a product key to its slot index.
    ///
    /// The last 3 characters of `key` are read as a base-10 integer and reduced
    /// modulo the table capacity, so `"P1005"` lands in slot `5 % capacity`.
    /// This is a deliberately narrow hash suited only to keys of the demo's
    /// format; it is not a general-purpose string hash and must not be treated
    /// as one. Keys shorter than 3 characters or whose last 3 characters are not
    /// decimal digits are rejected with [`TableError::KeyFormat`].
    pub fn hash(&self, key: &str) -> Result<usize, TableError> {
        let suffix: Vec<char> = key.chars().rev().take(SUFFIX_LEN).collect();
        if suffix.len() < SUFFIX_LEN {
            return Err(TableError::KeyFormat {
                key: key.to_string(),
                reason: KeyFormatReason::TooShort,
            });
        }
        let mut n: usize = 0;
        for c in suffix.iter().rev() {
            let Some(d) = c.to_digit(10) else {
                return Err(TableError::KeyFormat {
                    key: key.to_string(),
                    reason: KeyFormatReason::NonDigitSuffix,
                });
            };
            n = n * 10 + d as usize;
        }
        Ok(n % self.capacity())
    }

    /// Stores `value` under `key`.
    ///
    /// An existing entry for `key` keeps its position in the bucket and only has
    /// its value replaced. A new key is appended to the end of its bucket. A key
    /// that fails to hash leaves the table untouched.
    #[tracing::instrument(skip(self, value))]
    pub fn insert(&mut self, key: &str, value: V) -> Result<InsertOutcome, TableError> {
        let idx = self.hash(key)?;
        let entry = Entry {
            key: key.to_string(),
            value,
        };
        let outcome = match self.slots[idx].as_mut() {
            None => {
                self.slots[idx] = Some(vec![entry]);
                InsertOutcome::Created
            }
            Some(bucket) => match bucket.iter_mut().find(|e| e.key == key) {
                Some(existing) => {
                    existing.value = entry.value;
                    tracing::event!(Level::DEBUG, name = "Replaced", idx);
                    InsertOutcome::Replaced
                }
                None => {
                    bucket.push(entry);
                    tracing::event!(Level::DEBUG, name = "Collision", idx, chain = bucket.len());
                    InsertOutcome::Appended
                }
            },
        };
        match outcome {
            InsertOutcome::Created => {
                self.len += 1;
                self.counters.created += 1;
            }
            InsertOutcome::Appended => {
                self.len += 1;
                self.counters.appended += 1;
            }
            InsertOutcome::Replaced => self.counters.replaced += 1,
        }
        Ok(outcome)
    }

    /// Looks up `key`, returning `Ok(None)` when it was never inserted.
    #[tracing::instrument(skip(self))]
    pub fn get(&self, key: &str) -> Result<Option<&V>, TableError> {
        let idx = self.hash(key)?;
        let found = self.slots[idx]
            .as_ref()
            .and_then(|bucket| bucket.iter().find(|e| e.key == key))
            .map(|e| &e.value);
        match found {
            Some(_) => self.counters.hits.set(self.counters.hits.get() + 1),
            None => {
                self.counters.misses.set(self.counters.misses.get() + 1);
                tracing::event!(Level::DEBUG, name = "Not found", idx);
            }
        }
        Ok(found)
    }

    /// The entries chained in slot `idx`, or `None` if the slot never received
    /// an insert or `idx` is out of range.
    pub fn bucket(&self, idx: usize) -> Option<&[Entry<V>]> {
        self.slots.get(idx)?.as_deref()
    }

    /// Entries in slot order, then in chain order within a slot.
    pub fn iter(&self) -> impl Iterator<Item = &Entry<V>> {
        self.slots.iter().flatten().flatten()
    }

    pub fn snapshot(&self) -> Snapshot<'_, V> {
        Snapshot {
            slots: self
                .slots
                .iter()
                .enumerate()
                .map(|(index, slot)| SlotView {
                    index,
                    entries: slot.as_deref(),
                })
                .collect(),
        }
    }

    pub fn stats(&self) -> Stats {
        let occupied = self.slots.iter().flatten().count();
        let longest_chain = self.slots.iter().flatten().map(Vec::len).max().unwrap_or(0);
        Stats {
            hits: self.counters.hits.get(),
            misses: self.counters.misses.get(),
            created: self.counters.created,
            appended: self.counters.appended,
            replaced: self.counters.replaced,
            occupied,
            capacity: self.capacity(),
            longest_chain,
        }
    }
}

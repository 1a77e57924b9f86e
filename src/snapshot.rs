use std::fmt;

use crate::table::Entry;

/// One slot of a [`Snapshot`]. `entries` is `None` for a slot that never
/// received an insert.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SlotView<'a, V> {
    pub index: usize,
    pub entries: Option<&'a [Entry<V>]>,
}

/// Read-only view of every slot of a table, in index order.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Snapshot<'a, V> {
    pub slots: Vec<SlotView<'a, V>>,
}

impl<'a, V> Snapshot<'a, V> {
    pub fn iter(&self) -> impl Iterator<Item = &SlotView<'a, V>> {
        self.slots.iter()
    }

    pub fn slot(&self, index: usize) -> Option<&SlotView<'a, V>> {
        self.slots.get(index)
    }
}

impl<V: fmt::Debug> fmt::Display for SlotView<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Index: {}, Entries: ", self.index)?;
        let Some(entries) = self.entries else {
            return write!(f, "None");
        };
        write!(f, "[")?;
        for (i, e) in entries.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "({:?}, {:?})", e.key, e.value)?;
        }
        write!(f, "]")
    }
}

impl<V: fmt::Debug> fmt::Display for Snapshot<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current State of Hash Table:")?;
        for slot in &self.slots {
            writeln!(f, "{slot}")?;
        }
        writeln!(f)
    }
}

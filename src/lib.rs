pub mod demo;
pub mod error;
pub mod options;
pub mod snapshot;
pub mod stats;
pub mod table;

pub use crate::error::TableError;
pub use crate::table::{Entry, FixedBucketTable, InsertOutcome};

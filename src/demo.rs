use std::io::{self, Write};

use thiserror::Error;
use tracing::Level;

use crate::{error::TableError, options::DemoOptions, table::FixedBucketTable};

/// Product catalogue seeded by the demo, in insertion order. `P1011` and
/// `P1021` collide with `P1001` in a 10 slot table.
pub const PRODUCTS: [(&str, &str); 12] = [
    ("P1001", "Laptop"),
    ("P1002", "Smartphone"),
    ("P1003", "Tablet"),
    ("P1004", "Monitor"),
    ("P1005", "Keyboard"),
    ("P1006", "Mouse"),
    ("P1007", "Webcam"),
    ("P1008", "Headset"),
    ("P1009", "Microphone"),
    ("P1010", "Printer"),
    ("P1011", "Charger"),
    ("P1021", "External Hard Drive"),
];

pub const NOT_FOUND: &str = "Product not found";

#[derive(Error, Debug)]
pub enum DemoError {
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Inserts [`PRODUCTS`] one by one, printing the table after each insert, then
/// looks up the configured search key. Returns the table so callers can
/// inspect the final state.
#[tracing::instrument(skip_all, fields(capacity = options.capacity))]
pub fn run(
    options: &DemoOptions,
    out: &mut impl Write,
) -> Result<FixedBucketTable<&'static str>, DemoError> {
    let mut table = FixedBucketTable::new(options.capacity)?;

    writeln!(out, "Initial State of Hash Table:")?;
    writeln!(out, "{}", table.snapshot())?;

    for (key, value) in PRODUCTS {
        writeln!(out, "Inserting {key}: {value}")?;
        let outcome = table.insert(key, value)?;
        tracing::event!(Level::INFO, key, ?outcome);
        writeln!(out, "{}", table.snapshot())?;
    }

    let key = options.search_key.as_str();
    writeln!(out, "Searching for {key}...")?;
    let result = table.get(key)?.copied().unwrap_or(NOT_FOUND);
    writeln!(out, "Search Result: {result}")?;

    tracing::event!(Level::INFO, stats = %table.stats());
    Ok(table)
}

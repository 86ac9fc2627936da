//! Catalog loading.
//!
//! The engine itself never does I/O; this module is the reference
//! implementation of the external loader collaborator. It reads a JSON array
//! of four-field records and excludes malformed rows (any field missing,
//! null, or empty) *before* the engine sees them. Malformed rows are the one
//! defect class the system handles, and they are handled entirely here, so
//! everything downstream can assume well-formed records and stay total.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::{Catalog, WineRecord};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A loaded catalog plus the number of malformed rows that were excluded.
#[derive(Debug)]
pub struct LoadOutcome {
    pub catalog: Catalog,
    pub skipped: usize,
}

/// Row as it appears in the source data: fields may be missing or null.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    producer: Option<String>,
    #[serde(default)]
    origin: Option<String>,
    #[serde(default)]
    label: Option<String>,
}

fn field(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Parse a JSON array of records, dropping rows with any empty/absent field.
pub fn parse_catalog(json: &str) -> Result<LoadOutcome, LoadError> {
    let rows: Vec<RawRecord> = serde_json::from_str(json)?;
    let mut records = Vec::with_capacity(rows.len());
    let mut skipped = 0;

    for row in rows {
        match (field(row.name), field(row.producer), field(row.origin), field(row.label)) {
            (Some(name), Some(producer), Some(origin), Some(label)) => {
                records.push(WineRecord { name, producer, origin, label });
            }
            _ => skipped += 1,
        }
    }

    Ok(LoadOutcome { catalog: Catalog::new(records), skipped })
}

/// Read and parse a catalog file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<LoadOutcome, LoadError> {
    let text = std::fs::read_to_string(path)?;
    parse_catalog(&text)
}

// crates/unspsc-core/src/loader/csv_table.rs

//! CSV payload parser.
//!
//! Columns are located by header name, so extra columns and any column order
//! are accepted. Rows with a missing or empty `Code` or `Description`, or that
//! fail to decode, are skipped and counted.

use crate::error::{Result, UnspscError};
use crate::model::{Catalog, CodeRecord};
use serde::Deserialize;
use std::io::Read;
use tracing::debug;

const CODE_HEADER: &str = "Code";
const DESCRIPTION_HEADER: &str = "Description";

/// A row as it comes from the file; both fields may be absent.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Code")]
    code: Option<String>,
    #[serde(rename = "Description")]
    description: Option<String>,
}

impl RawRow {
    fn into_record(self) -> Option<CodeRecord> {
        match (self.code, self.description) {
            (Some(code), Some(description)) if !code.is_empty() && !description.is_empty() => {
                Some(CodeRecord::new(code, description))
            }
            _ => None,
        }
    }
}

pub(super) struct Parsed {
    pub(super) catalog: Catalog,
    pub(super) skipped_rows: usize,
}

pub(super) fn parse<R: Read>(reader: R) -> Result<Parsed> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv.headers()?.clone();
    for required in [CODE_HEADER, DESCRIPTION_HEADER] {
        if !headers.iter().any(|h| h == required) {
            return Err(UnspscError::InvalidData(format!(
                "missing '{required}' column (found: {})",
                headers.iter().collect::<Vec<_>>().join(", ")
            )));
        }
    }

    let mut records = Vec::new();
    let mut skipped_rows = 0;
    for (index, row) in csv.deserialize::<RawRow>().enumerate() {
        match row {
            Ok(raw) => match raw.into_record() {
                Some(record) => records.push(record),
                None => {
                    debug!(row = index + 1, "skipping row with missing code or description");
                    skipped_rows += 1;
                }
            },
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                debug!(row = index + 1, error = %e, "skipping malformed row");
                skipped_rows += 1;
            }
        }
    }

    Ok(Parsed {
        catalog: Catalog::from_records(records),
        skipped_rows,
    })
}

// crates/unspsc-core/src/model.rs

//! # Catalog Model
//!
//! The reference table held in memory: one [`CodeRecord`] per row, plus the
//! lowercased, folded and tokenized forms of its description computed once at
//! construction so the matcher never re-normalizes on a search.

use crate::common::CatalogStats;
use crate::text::{fold_key, words};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One row of the reference table.
///
/// `code` is always text: UNSPSC codes may carry leading zeros.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodeRecord {
    pub code: String,
    pub description: String,
}

impl CodeRecord {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// `(code, description)` as returned by [`main_search`](crate::main_search).
    pub fn into_pair(self) -> (String, String) {
        (self.code, self.description)
    }
}

impl<C: Into<String>, D: Into<String>> From<(C, D)> for CodeRecord {
    fn from((code, description): (C, D)) -> Self {
        Self::new(code, description)
    }
}

/// A candidate row with the score it reached during one search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredMatch {
    pub score: f64,
    pub code: String,
    pub description: String,
}

impl ScoredMatch {
    pub(crate) fn new(score: f64, record: &CodeRecord) -> Self {
        Self {
            score,
            code: record.code.clone(),
            description: record.description.clone(),
        }
    }

    pub fn to_record(&self) -> CodeRecord {
        CodeRecord::new(self.code.clone(), self.description.clone())
    }

    pub fn into_record(self) -> CodeRecord {
        CodeRecord::new(self.code, self.description)
    }
}

/// A row together with its precomputed match keys.
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub(crate) record: CodeRecord,
    /// Lowercased description; fuzzy scoring runs against this.
    pub(crate) lowered: String,
    /// Transliterated, lowercased description; acronym containment runs against this.
    pub(crate) folded: String,
    pub(crate) words: Vec<String>,
}

impl Entry {
    fn new(record: CodeRecord) -> Self {
        let lowered = record.description.to_lowercase();
        let folded = fold_key(&record.description);
        let words = words(&lowered);
        Self {
            record,
            lowered,
            folded,
            words,
        }
    }
}

/// The loaded reference table.
///
/// Immutable once built; a `&Catalog` can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) entries: Vec<Entry>,
    pub(crate) skipped_rows: usize,
    pub(crate) source: Option<PathBuf>,
}

impl Catalog {
    /// Build a catalog from in-memory records.
    pub fn from_records<I, R>(records: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<CodeRecord>,
    {
        Self {
            entries: records.into_iter().map(|r| Entry::new(r.into())).collect(),
            skipped_rows: 0,
            source: None,
        }
    }

    pub(crate) fn with_provenance(mut self, source: PathBuf, skipped_rows: usize) -> Self {
        self.source = Some(source);
        self.skipped_rows = skipped_rows;
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows in table order.
    pub fn records(&self) -> impl Iterator<Item = &CodeRecord> {
        self.entries.iter().map(|e| &e.record)
    }

    /// File this catalog was read from, if any.
    pub fn source(&self) -> Option<&std::path::Path> {
        self.source.as_deref()
    }
}

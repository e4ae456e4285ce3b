// crates/unspsc-core/src/lib.rs

//! # unspsc-core
//!
//! Fuzzy lookup of UNSPSC classification codes from free-text equipment
//! descriptions.
//!
//! A query such as `"SEM"` or `"uv-vis spectrophotometer"` is expanded through
//! an acronym dictionary ([`AcronymTable`]) into a list of variants
//! ([`expand_query`]), and each variant is scored against every row of the
//! reference table ([`Catalog`]) with a Ratcliff/Obershelp similarity ratio.
//!
//! ```no_run
//! use unspsc_core::main_search;
//!
//! for (code, description) in main_search("sem", 5) {
//!     println!("{code}  {description}");
//! }
//! ```
//!
//! For explicit error handling load the table yourself:
//!
//! ```no_run
//! use unspsc_core::{AcronymTable, Catalog, CodeSearch, SearchConfig};
//!
//! let catalog = Catalog::load()?;
//! let hits = catalog.find_codes("microscope", AcronymTable::builtin(), &SearchConfig::default());
//! # Ok::<(), unspsc_core::UnspscError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod acronyms;
pub mod common;
pub mod config;
pub mod error;
pub mod expand;
pub mod loader; // Candidate paths + CSV parsing
pub mod model;
pub mod ratio;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::acronyms::AcronymTable;
pub use crate::common::CatalogStats;
pub use crate::config::{
    SearchConfig, ACRONYM_HIT_SCORE, DEFAULT_MAX_RESULTS, DEFAULT_THRESHOLD, DEFAULT_TIMEOUT,
    PAGE_SIZE, STRICT_THRESHOLD,
};
pub use crate::error::{Result, UnspscError};
pub use crate::expand::expand_query;
pub use crate::model::{Catalog, CodeRecord, ScoredMatch};
pub use crate::ratio::similarity;
pub use crate::search::{main_search, search_status, MatchPhase, SearchOutcome, SearchStatus};
pub use crate::traits::CodeSearch;

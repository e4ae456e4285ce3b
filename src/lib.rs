//! Workspace crate re-exporting [`unspsc_core`] for the demos.
//!
//! ```rust
//! use unspsc_search::prelude::*;
//!
//! let catalog = Catalog::from_records([("41111720", "Scanning electron microscopes")]);
//! let hits = catalog.find_codes("sem", AcronymTable::builtin(), &SearchConfig::default());
//! assert_eq!(hits[0].code(), "41111720");
//! ```
pub use unspsc_core::*;

/// Everything a typical caller needs in one import.
pub mod prelude {
    pub use unspsc_core::{
        expand_query, similarity, AcronymTable, Catalog, CatalogStats, CodeRecord, CodeSearch,
        MatchPhase, Result, ScoredMatch, SearchConfig, SearchOutcome, SearchStatus, UnspscError,
    };
}

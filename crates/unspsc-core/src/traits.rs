// crates/unspsc-core/src/traits.rs
use crate::acronyms::AcronymTable;
use crate::common::CatalogStats;
use crate::config::SearchConfig;
use crate::model::CodeRecord;
use crate::search::SearchOutcome;

/// Search operations available on a loaded reference table.
///
/// Implemented for [`Catalog`](crate::Catalog) in `search.rs`.
pub trait CodeSearch {
    /// Row counts and provenance of the table.
    fn stats(&self) -> CatalogStats;

    /// Exact lookup by code, e.g. `"41111720"`.
    ///
    /// Leading and trailing whitespace in `code` is ignored.
    fn find_by_code(&self, code: &str) -> Option<&CodeRecord>;

    /// Rank table rows against `query`.
    ///
    /// Runs the acronym shortcut when the whole query is a dictionary key,
    /// otherwise a fuzzy scan over every expanded variant. Never fails: an
    /// empty query, `max_results == 0` or an exhausted time budget all yield
    /// a (possibly empty) outcome.
    ///
    /// # Example
    ///
    /// ```rust
    /// use unspsc_core::{AcronymTable, Catalog, CodeSearch, MatchPhase, SearchConfig};
    ///
    /// let catalog = Catalog::from_records([
    ///     ("41111720", "Scanning electron microscopes"),
    ///     ("43211507", "Laptop computers"),
    /// ]);
    ///
    /// let outcome = catalog.search("SEM", AcronymTable::builtin(), &SearchConfig::default());
    /// assert_eq!(outcome.phase, MatchPhase::Acronym);
    /// assert_eq!(outcome.matches[0].code, "41111720");
    /// ```
    fn search(&self, query: &str, acronyms: &AcronymTable, config: &SearchConfig) -> SearchOutcome;

    /// [`CodeSearch::search`] without the scores.
    fn find_codes(
        &self,
        query: &str,
        acronyms: &AcronymTable,
        config: &SearchConfig,
    ) -> Vec<CodeRecord> {
        self.search(query, acronyms, config).into_records()
    }
}

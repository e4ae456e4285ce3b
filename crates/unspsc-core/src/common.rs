use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Simple aggregate statistics for a loaded catalog.
///
/// Returned by [`Catalog::stats`](crate::Catalog::stats). `skipped_rows`
/// counts rows dropped at load time because a field was missing or the row
/// could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub rows: usize,
    pub skipped_rows: usize,
    /// File the catalog was read from, `None` for in-memory catalogs.
    pub source: Option<PathBuf>,
}

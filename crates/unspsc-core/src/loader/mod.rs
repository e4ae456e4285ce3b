// crates/unspsc-core/src/loader/mod.rs

//! # Reference Table Loader
//!
//! Resolves where the reference table lives, handles the physical layer
//! (file I/O, optional gzip) and delegates to the CSV parser.
//!
//! Candidate locations, first existing file wins:
//!
//! 1. `$UNSPSC_DATA`, if set;
//! 2. `<unspsc-core>/data/unspsc_codes.csv` (next to this crate);
//! 3. `./src/data/unspsc_codes.csv`;
//! 4. `./data/unspsc_codes.csv`.
//!
//! With the `compact` feature each directory is also probed for
//! `unspsc_codes.csv.gz`.

use crate::error::{Result, UnspscError};
use crate::model::Catalog;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use tracing::info;

mod common_io;
mod csv_table;

/// Environment variable that points at an explicit reference table.
pub const DATA_ENV_VAR: &str = "UNSPSC_DATA";

const DATASET_FILENAME: &str = "unspsc_codes.csv";

#[cfg(feature = "compact")]
const COMPRESSED_DATASET_FILENAME: &str = "unspsc_codes.csv.gz";

static CATALOG_CACHE: OnceCell<Catalog> = OnceCell::new();

impl Catalog {
    /// Directory holding the bundled sample table.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        DATASET_FILENAME
    }

    /// Every location [`Catalog::load`] tries, in order.
    pub fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(explicit) = std::env::var_os(DATA_ENV_VAR) {
            paths.push(PathBuf::from(explicit));
        }

        let dirs = [
            Self::default_data_dir(),
            Path::new("src").join("data"),
            PathBuf::from("data"),
        ];
        for dir in dirs {
            paths.push(dir.join(DATASET_FILENAME));
            #[cfg(feature = "compact")]
            paths.push(dir.join(COMPRESSED_DATASET_FILENAME));
        }
        paths
    }

    /// Load the table from the first existing candidate location.
    pub fn load() -> Result<Self> {
        Self::load_from_candidates(&Self::candidate_paths())
    }

    /// Load from the first of `candidates` that is an existing file.
    ///
    /// Fails with [`UnspscError::NotFound`] listing every candidate when none
    /// exists. Later candidates are not consulted if the first existing one
    /// fails to parse.
    pub fn load_from_candidates(candidates: &[PathBuf]) -> Result<Self> {
        match candidates.iter().find(|p| p.is_file()) {
            Some(path) => Self::load_from_path(path),
            None => Err(UnspscError::NotFound {
                tried: candidates.to_vec(),
            }),
        }
    }

    /// Load one explicit file (`.csv`, or `.csv.gz` with `compact`).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let parsed = csv_table::parse(reader)?;

        info!(
            path = %path.display(),
            rows = parsed.catalog.len(),
            skipped = parsed.skipped_rows,
            "loaded reference table"
        );

        Ok(parsed.catalog.with_provenance(path.to_path_buf(), parsed.skipped_rows))
    }

    /// Process-wide snapshot, loaded by [`Catalog::load`] on first use.
    ///
    /// A failed load is not cached; the next call tries again.
    pub fn shared() -> Result<&'static Catalog> {
        CATALOG_CACHE.get_or_try_init(Self::load)
    }
}

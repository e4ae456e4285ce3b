// crates/unspsc-core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the reference table or a dictionary.
///
/// Searching itself never fails; only I/O and parsing can.
#[derive(Debug, Error)]
pub enum UnspscError {
    /// None of the candidate locations held a reference table.
    #[error("reference table not found; tried: {}", display_paths(.tried))]
    NotFound { tried: Vec<PathBuf> },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, UnspscError>;

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_lists_every_candidate() {
        let err = UnspscError::NotFound {
            tried: vec![PathBuf::from("a/unspsc_codes.csv"), PathBuf::from("b/unspsc_codes.csv")],
        };
        let msg = err.to_string();
        assert!(msg.contains("a/unspsc_codes.csv"));
        assert!(msg.contains("b/unspsc_codes.csv"));
    }
}

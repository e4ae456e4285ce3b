// crates/unspsc-core/src/config.rs

//! Search tuning knobs.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Number of results returned when the caller does not ask for more.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Step by which "show more" grows the requested result count.
pub const PAGE_SIZE: usize = 5;

/// Acceptance threshold of the main search path.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Stricter acceptance threshold used by the alternate search path.
pub const STRICT_THRESHOLD: f64 = 0.4;

/// Wall-clock budget for the fuzzy scan.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Score given to rows found through the acronym shortcut.
///
/// Similarity ratios never exceed `1.0`, so acronym hits always rank first.
pub const ACRONYM_HIT_SCORE: f64 = 2.0;

/// Parameters of a single search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub max_results: usize,
    /// Fuzzy matches must score strictly above this value.
    pub threshold: f64,
    #[serde(rename = "timeout_ms", with = "duration_ms")]
    pub timeout: Duration,
    pub acronym_hit_score: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            threshold: DEFAULT_THRESHOLD,
            timeout: DEFAULT_TIMEOUT,
            acronym_hit_score: ACRONYM_HIT_SCORE,
        }
    }
}

impl SearchConfig {
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Result count for the given 1-based page of "show more" increments.
    ///
    /// Page `0` is treated as page `1`.
    pub fn for_page(self, page: usize) -> Self {
        self.with_max_results(page.max(1) * PAGE_SIZE)
    }
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

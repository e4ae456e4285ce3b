// crates/unspsc-core/src/search.rs

//! # Matcher / Ranker
//!
//! Two phases:
//!
//! 1. **Acronym shortcut.** If the whole normalized query is a dictionary key,
//!    every row whose description contains the expansion scores
//!    [`ACRONYM_HIT_SCORE`](crate::ACRONYM_HIT_SCORE). Any hit ends the search.
//! 2. **Fuzzy scan.** Every expanded variant is compared with every row's
//!    description and with each of its words; the best ratio is the row's
//!    score. Rows scoring above the threshold are kept, deduplicated by code.
//!
//! Cost is `variants × rows × words` ratio computations; the scan checks its
//! wall-clock budget before each row and returns what it has on expiry.

use crate::acronyms::AcronymTable;
use crate::common::CatalogStats;
use crate::config::SearchConfig;
use crate::expand::expand_query;
use crate::model::{Catalog, CodeRecord, Entry, ScoredMatch};
use crate::ratio::similarity;
use crate::text::{fold_key, normalize_query};
use crate::traits::CodeSearch;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::time::Instant;
use tracing::{debug, error, warn};

/// Which phase produced a [`SearchOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPhase {
    /// Blank query or zero requested results; nothing was scanned.
    Empty,
    Acronym,
    Fuzzy,
}

/// Ranked matches of one search, best first, unique by code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub matches: Vec<ScoredMatch>,
    pub phase: MatchPhase,
    /// The fuzzy scan ran out of time; `matches` covers the rows seen so far.
    pub timed_out: bool,
}

impl SearchOutcome {
    fn empty() -> Self {
        Self {
            matches: Vec::new(),
            phase: MatchPhase::Empty,
            timed_out: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn records(&self) -> Vec<CodeRecord> {
        self.matches.iter().map(ScoredMatch::to_record).collect()
    }

    pub fn into_records(self) -> Vec<CodeRecord> {
        self.matches.into_iter().map(ScoredMatch::into_record).collect()
    }
}

/// Result of a search that also says *why* it may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStatus {
    Matches(Vec<CodeRecord>),
    /// The table loaded but nothing scored high enough.
    NoMatch,
    /// The reference table could not be loaded.
    NoData(String),
}

impl SearchStatus {
    /// Run `query` against a load result, folding load failures into `NoData`.
    pub fn evaluate<E: fmt::Display>(
        loaded: std::result::Result<&Catalog, E>,
        query: &str,
        acronyms: &AcronymTable,
        config: &SearchConfig,
    ) -> Self {
        let catalog = match loaded {
            Ok(catalog) => catalog,
            Err(e) => {
                error!(error = %e, "reference table unavailable");
                return SearchStatus::NoData(e.to_string());
            }
        };

        let records = catalog.find_codes(query, acronyms, config);
        if records.is_empty() {
            SearchStatus::NoMatch
        } else {
            SearchStatus::Matches(records)
        }
    }

    /// Matches, or an empty vector for both `NoMatch` and `NoData`.
    pub fn into_records(self) -> Vec<CodeRecord> {
        match self {
            SearchStatus::Matches(records) => records,
            SearchStatus::NoMatch | SearchStatus::NoData(_) => Vec::new(),
        }
    }
}

/// Search the shared reference table with the built-in dictionary.
///
/// Returns up to `max_results` `(code, description)` pairs, best first.
/// Never fails: a missing table and a query without matches both return an
/// empty vector. Use [`search_status`] to tell them apart.
pub fn main_search(query: &str, max_results: usize) -> Vec<(String, String)> {
    search_status(query, max_results)
        .into_records()
        .into_iter()
        .map(CodeRecord::into_pair)
        .collect()
}

/// Like [`main_search`] but reports whether the table could be loaded.
pub fn search_status(query: &str, max_results: usize) -> SearchStatus {
    let config = SearchConfig::default().with_max_results(max_results);
    SearchStatus::evaluate(Catalog::shared(), query, AcronymTable::builtin(), &config)
}

impl CodeSearch for Catalog {
    fn stats(&self) -> CatalogStats {
        CatalogStats {
            rows: self.entries.len(),
            skipped_rows: self.skipped_rows,
            source: self.source.clone(),
        }
    }

    fn find_by_code(&self, code: &str) -> Option<&CodeRecord> {
        let code = code.trim();
        self.records().find(|r| r.code == code)
    }

    fn search(&self, query: &str, acronyms: &AcronymTable, config: &SearchConfig) -> SearchOutcome {
        let normalized = normalize_query(query);
        if normalized.is_empty() || config.max_results == 0 {
            return SearchOutcome::empty();
        }

        if let Some(expansion) = acronyms.get(&normalized) {
            let hits = self.acronym_hits(expansion, config.acronym_hit_score);
            if !hits.is_empty() {
                debug!(query = %normalized, expansion, hits = hits.len(), "acronym shortcut");
                return SearchOutcome {
                    matches: rank(hits, config.max_results),
                    phase: MatchPhase::Acronym,
                    timed_out: false,
                };
            }
        }

        self.fuzzy_scan(&normalized, acronyms, config)
    }
}

impl Catalog {
    /// Rows whose description contains `expansion`, case- and accent-insensitively.
    fn acronym_hits(&self, expansion: &str, score: f64) -> Vec<ScoredMatch> {
        let needle = fold_key(expansion);
        self.entries
            .iter()
            .filter(|e| e.folded.contains(&needle))
            .map(|e| ScoredMatch::new(score, &e.record))
            .collect()
    }

    fn fuzzy_scan(&self, query: &str, acronyms: &AcronymTable, config: &SearchConfig) -> SearchOutcome {
        let variants = expand_query(query, acronyms);
        let started = Instant::now();
        let mut timed_out = false;
        let mut accepted = Vec::new();

        'scan: for variant in &variants {
            for entry in &self.entries {
                if started.elapsed() >= config.timeout {
                    timed_out = true;
                    break 'scan;
                }
                let score = entry.score(variant);
                if score > config.threshold {
                    accepted.push(ScoredMatch::new(score, &entry.record));
                }
            }
        }

        if timed_out {
            warn!(
                query,
                budget_ms = config.timeout.as_millis() as u64,
                partial = accepted.len(),
                "fuzzy scan exceeded its time budget; returning partial results"
            );
        }
        debug!(query, variants = variants.len(), accepted = accepted.len(), "fuzzy scan");

        SearchOutcome {
            matches: rank(accepted, config.max_results),
            phase: MatchPhase::Fuzzy,
            timed_out,
        }
    }
}

impl Entry {
    /// Best ratio of `variant` against the whole description or any one word.
    fn score(&self, variant: &str) -> f64 {
        self.words
            .iter()
            .map(|w| similarity(variant, w))
            .fold(similarity(variant, &self.lowered), f64::max)
    }
}

/// Keep the best match per code, order by score (ties: code ascending), truncate.
///
/// Between equal scores for one code the first occurrence wins.
fn rank(matches: Vec<ScoredMatch>, limit: usize) -> Vec<ScoredMatch> {
    let mut best: HashMap<String, ScoredMatch> = HashMap::new();
    for m in matches {
        let keep_existing = matches!(best.get(&m.code), Some(kept) if kept.score >= m.score);
        if !keep_existing {
            best.insert(m.code.clone(), m);
        }
    }

    let mut ranked: Vec<ScoredMatch> = best.into_values().collect();
    ranked.sort_by(by_score_then_code);
    ranked.truncate(limit);
    ranked
}

fn by_score_then_code(a: &ScoredMatch, b: &ScoredMatch) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.code.cmp(&b.code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn scenario_catalog() -> Catalog {
        Catalog::from_records([
            ("41111720", "Scanning electron microscopes"),
            ("43211507", "Laptop computers"),
        ])
    }

    fn lab_catalog() -> Catalog {
        Catalog::from_records([
            ("41111720", "Scanning electron microscopes"),
            ("41111721", "Transmission electron microscopes"),
            ("41111709", "Binocular light compound microscopes"),
            ("41115406", "Spectrophotometers"),
            ("41115709", "Gas chromatographs"),
            ("43211507", "Laptop computers"),
        ])
    }

    fn scored(score: f64, code: &str) -> ScoredMatch {
        ScoredMatch {
            score,
            code: code.to_string(),
            description: format!("row {code}"),
        }
    }

    #[test]
    fn sem_returns_only_the_microscope() {
        let outcome = scenario_catalog().search("SEM", AcronymTable::builtin(), &SearchConfig::default());
        assert_eq!(outcome.phase, MatchPhase::Acronym);
        assert_eq!(
            outcome.into_records(),
            [CodeRecord::new("41111720", "Scanning electron microscopes")]
        );
    }

    #[test]
    fn acronym_hits_outrank_fuzzy_scores() {
        let outcome = lab_catalog().search("tem", AcronymTable::builtin(), &SearchConfig::default());
        assert_eq!(outcome.phase, MatchPhase::Acronym);
        assert_eq!(outcome.matches[0].code, "41111721");
        assert!(outcome.matches[0].score > 1.0);
    }

    #[test]
    fn acronym_without_hits_falls_back_to_fuzzy() {
        // No row mentions "liquid chromatograph"; the expansion still counts as a variant.
        let outcome = lab_catalog().search("lc", AcronymTable::builtin(), &SearchConfig::default());
        assert_eq!(outcome.phase, MatchPhase::Fuzzy);
        let codes: Vec<&str> = outcome.matches.iter().map(|m| m.code.as_str()).collect();
        assert_eq!(codes, ["41115709", "41111720", "41111721", "43211507", "41111709"]);
        assert!((outcome.matches[0].score - 13.0 / 17.0).abs() < 1e-12);
    }

    #[test]
    fn empty_query_short_circuits() {
        let outcome = lab_catalog().search("   ", AcronymTable::builtin(), &SearchConfig::default());
        assert_eq!(outcome.phase, MatchPhase::Empty);
        assert!(outcome.is_empty());
    }

    #[test]
    fn zero_max_results_returns_nothing() {
        let cfg = SearchConfig::default().with_max_results(0);
        assert!(lab_catalog().search("microscope", AcronymTable::builtin(), &cfg).is_empty());
    }

    #[test]
    fn max_results_one_keeps_the_best_row() {
        let cfg = SearchConfig::default().with_max_results(1);
        let all = lab_catalog().search("microscope", AcronymTable::builtin(), &SearchConfig::default());
        let one = lab_catalog().search("microscope", AcronymTable::builtin(), &cfg);
        assert!(all.len() > 1);
        assert_eq!(one.len(), 1);
        assert_eq!(one.matches[0], all.matches[0]);
    }

    #[test]
    fn unrelated_rows_stay_below_threshold() {
        let outcome = lab_catalog().search("zzzz", AcronymTable::builtin(), &SearchConfig::default());
        assert!(outcome.is_empty());
        assert!(!outcome.timed_out);
    }

    #[test]
    fn word_level_score_beats_full_description() {
        let catalog = Catalog::from_records([("41111709", "Binocular light compound microscopes")]);
        let outcome = catalog.search("compounds", &AcronymTable::empty(), &SearchConfig::default());
        // "compounds" vs the word "compound"
        assert!((outcome.matches[0].score - 16.0 / 17.0).abs() < 1e-12);
    }

    #[test]
    fn stricter_threshold_drops_weak_rows() {
        let loose = lab_catalog().search("spectro", &AcronymTable::empty(), &SearchConfig::default());
        let strict = lab_catalog().search(
            "spectro",
            &AcronymTable::empty(),
            &SearchConfig::default().with_threshold(0.9),
        );
        assert_eq!(loose.len(), 5);
        assert!(strict.is_empty());
    }

    #[test]
    fn zero_budget_times_out_without_panicking() {
        let cfg = SearchConfig::default().with_timeout(Duration::ZERO);
        let outcome = lab_catalog().search("microscope", &AcronymTable::empty(), &cfg);
        assert!(outcome.timed_out);
        assert_eq!(outcome.phase, MatchPhase::Fuzzy);
        assert!(outcome.is_empty());
    }

    #[test]
    fn rank_dedups_by_code_keeping_highest() {
        let ranked = rank(
            vec![scored(0.4, "b"), scored(0.9, "a"), scored(0.7, "b"), scored(0.5, "a")],
            10,
        );
        let got: Vec<(&str, f64)> = ranked.iter().map(|m| (m.code.as_str(), m.score)).collect();
        assert_eq!(got, [("a", 0.9), ("b", 0.7)]);
    }

    #[test]
    fn rank_breaks_ties_by_code_ascending() {
        let ranked = rank(vec![scored(0.8, "c"), scored(0.8, "a"), scored(0.8, "b")], 2);
        let codes: Vec<&str> = ranked.iter().map(|m| m.code.as_str()).collect();
        assert_eq!(codes, ["a", "b"]);
    }

    #[test]
    fn find_by_code_trims_input() {
        let catalog = lab_catalog();
        assert_eq!(
            catalog.find_by_code(" 41115709 ").map(CodeRecord::description),
            Some("Gas chromatographs")
        );
        assert!(catalog.find_by_code("99999999").is_none());
    }

    #[test]
    fn evaluate_distinguishes_no_data_from_no_match() {
        let status = SearchStatus::evaluate(
            Err(crate::UnspscError::NotFound { tried: Vec::new() }),
            "sem",
            AcronymTable::builtin(),
            &SearchConfig::default(),
        );
        assert!(matches!(status, SearchStatus::NoData(_)));

        let catalog = lab_catalog();
        let status = SearchStatus::evaluate(Ok::<_, crate::UnspscError>(&catalog), "zzzz", AcronymTable::builtin(), &SearchConfig::default());
        assert_eq!(status, SearchStatus::NoMatch);
    }
}

// crates/unspsc-core/src/expand.rs

//! # Query Expander
//!
//! Turns one raw query into the ordered list of variants the matcher scores.

use crate::acronyms::AcronymTable;
use crate::text::normalize_query;
use std::collections::HashSet;

/// Endings after which no naive suffix forms are generated.
const TERMINAL_SUFFIXES: [&str; 3] = ["s", "er", "or"];

/// Suffixes appended to produce naive plural / agent-noun forms.
const SUFFIXES: [&str; 3] = ["s", "er", "or"];

/// Expand `query` into deduplicated search variants.
///
/// Order of the output:
/// 1. the lowercased, trimmed query;
/// 2. a hyphen-to-space variant if the query contains `-`;
/// 3. for each of the above: the acronym expansion (if the variant is a key
///    of `acronyms`), a space-collapsed form (if it contains a space), each
///    whitespace-delimited token, and `+s`, `+er`, `+or` forms unless it
///    already ends in `s`, `er` or `or`.
///
/// Duplicates are dropped keeping the first occurrence. The result is never
/// empty: blank input yields `[""]`.
///
/// ```rust
/// use unspsc_core::{expand_query, AcronymTable};
///
/// let variants = expand_query("SEM", AcronymTable::builtin());
/// assert_eq!(
///     variants,
///     ["sem", "scanning electron microscope", "sems", "semer", "semor"]
/// );
/// ```
pub fn expand_query(query: &str, acronyms: &AcronymTable) -> Vec<String> {
    let normalized = normalize_query(query);
    if normalized.is_empty() {
        return vec![normalized];
    }

    let mut base = vec![normalized.clone()];
    if normalized.contains('-') {
        base.push(normalized.replace('-', " "));
    }

    let mut variations = Vec::new();
    for q in &base {
        if let Some(expansion) = acronyms.get(q) {
            variations.push(expansion.to_owned());
        }

        if q.contains(' ') {
            variations.push(q.replace(' ', ""));
        }

        variations.extend(q.split_whitespace().map(str::to_owned));

        if !TERMINAL_SUFFIXES.iter().any(|end| q.ends_with(end)) {
            variations.extend(SUFFIXES.iter().map(|suffix| format!("{q}{suffix}")));
        }
    }

    let mut seen = HashSet::new();
    base.into_iter()
        .chain(variations)
        .filter(|v| seen.insert(v.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> AcronymTable {
        AcronymTable::from_pairs([
            ("sem", "scanning electron microscope"),
            ("uv-vis", "ultraviolet-visible spectrophotometer"),
            ("ph meter", "device for measuring ph"),
        ])
    }

    #[test]
    fn acronym_key_adds_expansion_after_query() {
        assert_eq!(
            expand_query("  SEM ", &fixture()),
            ["sem", "scanning electron microscope", "sems", "semer", "semor"]
        );
    }

    #[test]
    fn hyphenated_query_yields_space_variant_and_tokens() {
        assert_eq!(
            expand_query("UV-Vis", &fixture()),
            [
                "uv-vis",
                "uv vis",
                "ultraviolet-visible spectrophotometer",
                "uvvis",
                "uv",
                "vis",
            ]
        );
    }

    #[test]
    fn multi_word_acronym_key_is_expanded() {
        let variants = expand_query("pH meter", &fixture());
        assert_eq!(variants[0], "ph meter");
        assert_eq!(variants[1], "device for measuring ph");
        assert!(variants.contains(&"phmeter".to_string()));
        // ends in "er": no suffix forms
        assert!(!variants.iter().any(|v| v.starts_with("ph meter") && v.len() > "ph meter".len()));
    }

    #[test]
    fn suffix_forms_skipped_for_plural_and_agent_nouns() {
        let empty = AcronymTable::empty();
        assert_eq!(expand_query("lasers", &empty), ["lasers"]);
        assert_eq!(expand_query("analyzer", &empty), ["analyzer"]);
        assert_eq!(expand_query("reactor", &empty), ["reactor"]);
        assert_eq!(
            expand_query("microscope", &empty),
            ["microscope", "microscopes", "microscopeer", "microscopeor"]
        );
    }

    #[test]
    fn duplicates_keep_first_position() {
        // The single token equals the query itself and is dropped.
        let variants = expand_query("centrifuge", &AcronymTable::empty());
        assert_eq!(variants.iter().filter(|v| *v == "centrifuge").count(), 1);
        assert_eq!(variants[0], "centrifuge");
    }

    #[test]
    fn blank_input_yields_single_empty_variant() {
        assert_eq!(expand_query("   ", &fixture()), [""]);
        assert_eq!(expand_query("", &fixture()), [""]);
    }
}

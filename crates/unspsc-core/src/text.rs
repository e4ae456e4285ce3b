// crates/unspsc-core/src/text.rs

//! Text normalization shared by the expander, the loader and the matcher.

/// Lowercase and trim a query.
///
/// This is the only normalization applied before expansion; dictionary keys
/// are compared against its output verbatim.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Convert a string into a folded key suitable for substring comparison.
///
/// Transliterates Unicode to ASCII with `deunicode` (e.g. `Ångström` ->
/// `Angstrom`) and lowercases the result.
///
/// ```rust
/// use unspsc_core::text::fold_key;
///
/// assert_eq!(fold_key("Ångström Spectrometers"), "angstrom spectrometers");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Whitespace-delimited words of `s`, in order.
pub fn words(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_owned).collect()
}

/// Case- and accent-insensitive substring test.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold_key(haystack).contains(&fold_key(needle))
}

// crates/unspsc-core/src/ratio.rs

//! # Similarity Ratio
//!
//! Ratcliff/Obershelp "gestalt pattern matching": find the longest common
//! block, recurse on the pieces to its left and right, and report
//! `2·M / (|a| + |b|)` where `M` is the total size of all matched blocks.
//!
//! The block search mirrors the classic `SequenceMatcher` algorithm,
//! including its "popular element" heuristic: when the second sequence has at
//! least 200 elements, characters occurring more than `1% + 1` times are not
//! used to seed matches (they can still extend one). Scores are therefore
//! reproducible against reference tables computed with that algorithm.

use std::collections::HashMap;

const AUTOJUNK_MIN_LEN: usize = 200;

/// Normalized similarity of `a` and `b` in `[0.0, 1.0]`.
///
/// Comparison is per Unicode scalar value and case-sensitive; callers
/// lowercase both sides first. Two empty strings are identical (`1.0`).
///
/// ```rust
/// use unspsc_core::similarity;
///
/// assert_eq!(similarity("abcd", "bcde"), 0.75);
/// assert_eq!(similarity("laptop", "laptop"), 1.0);
/// assert_eq!(similarity("zzzz", "laptop"), 0.0);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched = BlockMatcher::new(&a, &b).matched_len();
    2.0 * matched as f64 / total as f64
}

struct BlockMatcher<'a> {
    a: &'a [char],
    b: &'a [char],
    /// Positions of each non-popular character of `b`, ascending.
    b2j: HashMap<char, Vec<usize>>,
}

impl<'a> BlockMatcher<'a> {
    fn new(a: &'a [char], b: &'a [char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &ch) in b.iter().enumerate() {
            b2j.entry(ch).or_default().push(j);
        }

        if b.len() >= AUTOJUNK_MIN_LEN {
            let limit = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= limit);
        }

        Self { a, b, b2j }
    }

    /// Total length of all matching blocks.
    fn matched_len(&self) -> usize {
        let mut total = 0;
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let (i, j, k) = self.longest_match(alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }
            total += k;
            if alo < i && blo < j {
                pending.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                pending.push((i + k, ahi, j + k, bhi));
            }
        }
        total
    }

    /// Longest block `a[i..i+k] == b[j..j+k]` within the given windows.
    ///
    /// Ties go to the block starting earliest in `a`, then earliest in `b`.
    fn longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> (usize, usize, usize) {
        let (a, b) = (self.a, self.b);
        let (mut best_i, mut best_j, mut best_k) = (alo, blo, 0);

        // j2len[j] = length of the match ending at a[i - 1], b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for (i, ch) in a.iter().enumerate().take(ahi).skip(alo) {
            let mut next: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(ch) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next.insert(j, k);
                    if k > best_k {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_k = k;
                    }
                }
            }
            j2len = next;
        }

        // Popular characters never seed a block; let them extend one.
        while best_i > alo && best_j > blo && a[best_i - 1] == b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_k += 1;
        }
        while best_i + best_k < ahi && best_j + best_k < bhi && a[best_i + best_k] == b[best_j + best_k] {
            best_k += 1;
        }

        (best_i, best_j, best_k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-12
    }

    #[test]
    fn identical_and_empty() {
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("sem", "sem"), 1.0);
        assert_eq!(similarity("a", ""), 0.0);
        assert_eq!(similarity("", "a"), 0.0);
    }

    #[test]
    fn plural_scores_high() {
        assert!(close(similarity("microscope", "microscopes"), 20.0 / 21.0));
        assert!(close(similarity("computer", "computers"), 16.0 / 17.0));
    }

    #[test]
    fn recursion_collects_blocks_on_both_sides() {
        // "microscopes" aligns as one block inside the longer phrase.
        assert!(close(similarity("microscopes", "scanning electron microscopes"), 0.55));
        assert!(close(similarity("ratcliff", "obershelp"), 4.0 / 17.0));
    }

    #[test]
    fn short_acronym_against_long_description_is_low() {
        assert!(close(similarity("sem", "scanning electron microscopes"), 0.1875));
    }

    #[test]
    fn popular_characters_do_not_seed_blocks() {
        let b = format!("{}c{}", "b".repeat(150), "a".repeat(60));
        // Only the leading "b" is recovered by extension; "a" is popular.
        assert!(close(similarity("ba", &b), 2.0 / 213.0));
    }

    #[test]
    fn popular_heuristic_only_applies_to_long_sequences() {
        let b = format!("{}c{}", "b".repeat(100), "a".repeat(60));
        assert!(close(similarity("ba", &b), 4.0 / 163.0));
    }

    #[test]
    fn popular_heuristic_looks_at_second_argument_only() {
        let long = format!("{}c{}", "b".repeat(150), "a".repeat(60));
        assert!(close(similarity(&long, "ba"), 4.0 / 213.0));
        assert!(similarity("ba", &long) < similarity(&long, "ba"));
    }
}

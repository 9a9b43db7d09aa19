//! Greedy non-overlapping selection
//!
//! Candidates are visited longest first (earliest start on ties) and kept
//! only when none of their positions is already taken. There is no
//! backtracking, so the result is not necessarily the selection with the
//! most palindromes or the largest coverage.

use super::types::SubstringInterval;
use std::cmp::Ordering;

/// Bitset marking which text positions belong to an accepted palindrome
struct OccupancyBitset {
    bits: Vec<u64>,
}

impl OccupancyBitset {
    /// Create a zeroed bitset covering `len` positions
    fn new(len: usize) -> Self {
        Self {
            bits: vec![0u64; len.div_ceil(64)],
        }
    }

    /// Check if any position in `[start, end]` is set
    #[inline]
    fn any_set(&self, start: usize, end: usize) -> bool {
        (start >> 6..=end >> 6).any(|word| self.bits[word] & Self::word_mask(word, start, end) != 0)
    }

    /// Set every position in `[start, end]`
    #[inline]
    fn set_range(&mut self, start: usize, end: usize) {
        for word in start >> 6..=end >> 6 {
            self.bits[word] |= Self::word_mask(word, start, end);
        }
    }

    /// Bits of `word` that fall inside `[start, end]`
    #[inline]
    fn word_mask(word: usize, start: usize, end: usize) -> u64 {
        let lo = if word == start >> 6 { start & 63 } else { 0 };
        let hi = if word == end >> 6 { end & 63 } else { 63 };
        (u64::MAX >> (63 - hi)) & (u64::MAX << lo)
    }
}

/// Selection order: longer first, then earlier start
fn by_length_then_start(a: &SubstringInterval, b: &SubstringInterval) -> Ordering {
    b.len().cmp(&a.len()).then(a.start.cmp(&b.start))
}

/// Greedily keep non-overlapping candidates over a text of `text_len`
/// positions. The result is in selection order (longest first).
pub fn select_non_overlapping(
    mut candidates: Vec<SubstringInterval>,
    text_len: usize,
) -> Vec<SubstringInterval> {
    // (len, start) is unique per candidate, so an unstable sort is deterministic
    candidates.sort_unstable_by(by_length_then_start);

    let mut occupied = OccupancyBitset::new(text_len);
    let mut accepted = Vec::new();

    for candidate in candidates {
        if occupied.any_set(candidate.start, candidate.end) {
            continue;
        }
        occupied.set_range(candidate.start, candidate.end);
        accepted.push(candidate);
    }

    accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: usize, end: usize) -> SubstringInterval {
        SubstringInterval::new(start, end)
    }

    #[test]
    fn test_longest_wins_overlap() {
        let accepted = select_non_overlapping(vec![iv(0, 2), iv(1, 3), iv(0, 4)], 5);
        assert_eq!(accepted, vec![iv(0, 4)]);
    }

    #[test]
    fn test_tie_prefers_earliest_start() {
        let accepted = select_non_overlapping(vec![iv(2, 4), iv(0, 2)], 5);
        assert_eq!(accepted, vec![iv(0, 2)]);
    }

    #[test]
    fn test_rejected_is_not_reconsidered() {
        // Taking (2, 6) blocks both (0, 3) and (5, 8), although they together
        // would cover more
        let accepted = select_non_overlapping(vec![iv(0, 3), iv(2, 6), iv(5, 8)], 9);
        assert_eq!(accepted, vec![iv(2, 6)]);
    }

    #[test]
    fn test_adjacent_intervals_both_kept() {
        let accepted = select_non_overlapping(vec![iv(0, 2), iv(3, 5)], 8);
        assert_eq!(accepted, vec![iv(0, 2), iv(3, 5)]);
    }

    #[test]
    fn test_empty_candidates() {
        assert!(select_non_overlapping(Vec::new(), 10).is_empty());
    }

    #[test]
    fn test_bitset_ranges_across_words() {
        let mut bitset = OccupancyBitset::new(200);
        assert!(!bitset.any_set(0, 199));

        bitset.set_range(60, 130);
        assert!(bitset.any_set(60, 60));
        assert!(bitset.any_set(130, 140));
        assert!(bitset.any_set(0, 199));
        assert!(!bitset.any_set(0, 59));
        assert!(!bitset.any_set(131, 199));

        bitset.set_range(63, 64);
        bitset.set_range(199, 199);
        assert!(bitset.any_set(199, 199));
        assert!(!bitset.any_set(131, 198));
    }

    #[test]
    fn test_word_mask() {
        assert_eq!(OccupancyBitset::word_mask(0, 0, 63), u64::MAX);
        assert_eq!(OccupancyBitset::word_mask(0, 0, 0), 1);
        assert_eq!(OccupancyBitset::word_mask(0, 63, 100), 1 << 63);
        assert_eq!(OccupancyBitset::word_mask(1, 63, 65), 0b11);
    }
}

//! Palindrome scanning module
//!
//! Finds the non-overlapping palindromes of a letters-and-digits text,
//! preferring longer palindromes, and returns them left to right.
//!
//! ## Pipeline
//!
//! - `validate`: rejects any code point that is not a letter or digit
//! - `tree`: palindromic tree reporting the longest palindromic suffix per position
//! - `candidates`: keeps those suffixes of at least the minimum length
//! - `select`: greedy longest-first selection over an occupancy bitset
//! - `assemble`: orders the selection by start and slices the text

pub mod assemble;
pub mod candidates;
pub mod select;
pub mod text;
pub mod tree;
pub mod types;
pub mod validate;

// Re-exports for convenience
pub use text::ScannedText;
pub use tree::PalindromicTree;
pub use types::{
    MIN_PALINDROME_LEN, NodeId, PalindromeError, PalindromeMatch, ScanConfig, ScanReport,
    SubstringInterval,
};
pub use validate::validate_letters_or_digits;

use assemble::assemble;
use candidates::collect_candidates;
use select::select_non_overlapping;

/// Find palindromes with the default configuration.
///
/// `None` stands for absent input and fails with [`PalindromeError::NullInput`].
///
/// ```
/// use palscan::palindrome::find_palindromes;
///
/// let found = find_palindromes(Some("abcba12321xyzzyx")).unwrap();
/// assert_eq!(found, vec!["abcba", "12321", "xyzzyx"]);
/// ```
pub fn find_palindromes(text: Option<&str>) -> Result<Vec<String>, PalindromeError> {
    let text = text.ok_or(PalindromeError::NullInput)?;
    PalindromeFinder::with_defaults().find(text)
}

/// Palindrome scanner with a fixed configuration.
///
/// Holds no scanning state, so one finder can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct PalindromeFinder {
    config: ScanConfig,
}

impl PalindromeFinder {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Create a finder with default configuration
    pub fn with_defaults() -> Self {
        Self::new(ScanConfig::default())
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Selected palindromes as owned strings, left to right
    pub fn find(&self, text: &str) -> Result<Vec<String>, PalindromeError> {
        Ok(self
            .find_matches(text)?
            .into_iter()
            .map(|m| m.text)
            .collect())
    }

    /// Selected palindromes with their positions, left to right
    pub fn find_matches(&self, text: &str) -> Result<Vec<PalindromeMatch>, PalindromeError> {
        validate_letters_or_digits(text)?;

        let scanned = ScannedText::new(text);
        if scanned.len() < self.config.effective_min_length() {
            return Ok(Vec::new());
        }

        Ok(self.scan(&scanned).matches)
    }

    /// Scan a text and report tree statistics alongside the matches.
    ///
    /// Unlike [`find_matches`](Self::find_matches), the tree is built even for
    /// texts shorter than the minimum length.
    pub fn analyze(&self, text: &str) -> Result<ScanReport, PalindromeError> {
        validate_letters_or_digits(text)?;
        Ok(self.scan(&ScannedText::new(text)))
    }

    fn scan(&self, scanned: &ScannedText<'_>) -> ScanReport {
        let mut tree = PalindromicTree::new(scanned.chars());
        let candidates = collect_candidates(&mut tree, self.config.effective_min_length());
        let candidate_count = candidates.len();

        let accepted = select_non_overlapping(candidates, scanned.len());

        tracing::debug!(
            chars = scanned.len(),
            distinct = tree.distinct_palindromes(),
            candidates = candidate_count,
            accepted = accepted.len(),
            "scanned text"
        );

        ScanReport {
            char_count: scanned.len(),
            distinct_palindromes: tree.distinct_palindromes(),
            candidate_count,
            matches: assemble(scanned, accepted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(text: &str) -> Vec<String> {
        find_palindromes(Some(text)).unwrap()
    }

    #[test]
    fn test_null_input() {
        assert_eq!(find_palindromes(None), Err(PalindromeError::NullInput));
    }

    #[test]
    fn test_invalid_character() {
        assert_eq!(
            find_palindromes(Some("abc-def")),
            Err(PalindromeError::InvalidCharacter {
                index: 3,
                character: '-'
            })
        );
    }

    #[test]
    fn test_validation_runs_before_length_check() {
        assert!(find_palindromes(Some("a!")).is_err());
    }

    #[test]
    fn test_short_inputs() {
        for input in ["", "a", "Z", "1", "ab", "1a"] {
            assert!(find(input).is_empty(), "{input:?}");
        }
    }

    #[test]
    fn test_basic() {
        assert_eq!(find("aba"), vec!["aba"]);
        assert_eq!(find("ababa"), vec!["ababa"]);
        assert_eq!(find("zzaba123321qq"), vec!["aba", "123321"]);
        assert!(find("abcdefg12345").is_empty());
    }

    #[test]
    fn test_find_matches_positions() {
        let matches = PalindromeFinder::with_defaults()
            .find_matches("zzaba123321qq")
            .unwrap();
        assert_eq!(matches[0].interval, SubstringInterval::new(2, 4));
        assert_eq!(matches[1].interval, SubstringInterval::new(5, 10));
    }

    #[test]
    fn test_custom_min_length() {
        let finder = PalindromeFinder::new(ScanConfig {
            min_length: 5,
            ..Default::default()
        });
        assert_eq!(finder.find("abacdcxy12321").unwrap(), vec!["12321"]);

        let finder = PalindromeFinder::new(ScanConfig {
            min_length: 2,
            ..Default::default()
        });
        assert_eq!(finder.find("xaay").unwrap(), vec!["aa"]);
    }

    #[test]
    fn test_analyze_report() {
        let report = PalindromeFinder::with_defaults().analyze("ababa").unwrap();
        assert_eq!(report.char_count, 5);
        // a, b, aba, bab, ababa
        assert_eq!(report.distinct_palindromes, 5);
        assert_eq!(report.candidate_count, 3);
        assert_eq!(report.matches.len(), 1);
    }

    #[test]
    fn test_analyze_short_text_builds_tree() {
        let report = PalindromeFinder::with_defaults().analyze("aa").unwrap();
        assert_eq!(report.distinct_palindromes, 2);
        assert!(report.matches.is_empty());
    }
}

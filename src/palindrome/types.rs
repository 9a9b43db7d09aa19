//! Types for palindrome scanning
//!
//! Intervals, matches, configuration and the error type shared by the
//! scanning pipeline.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Index of a node in the palindromic tree arena
pub type NodeId = usize;

/// Shortest palindrome reported by default
pub const MIN_PALINDROME_LEN: usize = 3;

/// Errors raised before any scanning work is done
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PalindromeError {
    /// No text was supplied
    #[error("text must not be null")]
    NullInput,
    /// A code point that is neither a letter nor a digit
    #[error("Input must contain only letters and digits. Invalid character at index {index}.")]
    InvalidCharacter {
        /// Zero-based code point index of the offending character
        index: usize,
        character: char,
    },
}

/// Inclusive range of code point positions within a scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubstringInterval {
    /// First position (inclusive)
    pub start: usize,
    /// Last position (inclusive)
    pub end: usize,
}

impl SubstringInterval {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "interval start {start} after end {end}");
        Self { start, end }
    }

    /// Number of code points covered (never zero)
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Check whether two intervals share at least one position
    pub fn overlaps(&self, other: &SubstringInterval) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// A selected palindrome with its location in the original text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalindromeMatch {
    /// Code point positions in the scanned text
    pub interval: SubstringInterval,
    /// Byte offset of the first character (inclusive)
    pub byte_start: usize,
    /// Byte offset past the last character (exclusive)
    pub byte_end: usize,
    /// The palindrome itself
    pub text: String,
}

/// Statistics and results of scanning a single text
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanReport {
    /// Number of code points in the text
    pub char_count: usize,
    /// Distinct palindromic substrings seen by the tree
    pub distinct_palindromes: usize,
    /// Longest-suffix palindromes that met the minimum length
    pub candidate_count: usize,
    /// Palindromes kept by greedy selection, ordered by start
    pub matches: Vec<PalindromeMatch>,
}

/// Configuration for palindrome scanning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Shortest palindrome accepted as a candidate (default: 3)
    pub min_length: usize,
    /// Scan batch input lines in parallel (default: true)
    pub parallel: bool,
    /// Lines longer than this many characters are rejected in batch mode
    /// (default: 10M)
    pub max_line_chars: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            min_length: MIN_PALINDROME_LEN,
            parallel: true,
            max_line_chars: 10_000_000,
        }
    }
}

impl ScanConfig {
    /// Load configuration from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Minimum length actually used by the scanner (at least 1)
    #[inline]
    pub fn effective_min_length(&self) -> usize {
        self.min_length.max(1)
    }
}

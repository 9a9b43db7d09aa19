//! # palscan - Greedy palindrome scanner
//!
//! palscan splits a text of letters and digits into non-overlapping
//! palindromes of at least three characters, preferring longer ones, and
//! reports them left to right.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`palindrome`] - Validation, palindromic tree, candidate selection
//! - [`scan`] - Parallel line-oriented batch scanning
//! - [`output`] - Result formatting (plain, highlighted, JSON)
//! - [`utils`] - Logging setup and progress bars
//!
//! ## Quick Start
//!
//! ```
//! use palscan::palindrome::{find_palindromes, PalindromeFinder, ScanConfig};
//!
//! let found = find_palindromes(Some("zzaba123321qq")).unwrap();
//! assert_eq!(found, vec!["aba", "123321"]);
//!
//! // Positions and a custom minimum length
//! let finder = PalindromeFinder::new(ScanConfig { min_length: 5, ..Default::default() });
//! let matches = finder.find_matches("zzaba123321qq").unwrap();
//! assert_eq!(matches[0].interval.start, 5);
//! ```
//!
//! ## Algorithm
//!
//! 1. **Palindromic tree** - reports the longest palindromic suffix ending at
//!    every position in amortized constant time
//! 2. **Greedy selection** - candidates are taken longest first, earliest
//!    start on ties, skipping any that overlap an accepted one
//!
//! Each scan allocates its own tree and occupancy bitset, so scans can run
//! concurrently without coordination.

pub mod output;
pub mod palindrome;
pub mod scan;
pub mod utils;

pub use palindrome::{PalindromeError, PalindromeFinder, find_palindromes};

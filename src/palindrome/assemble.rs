use super::text::ScannedText;
use super::types::{PalindromeMatch, SubstringInterval};

/// Turn accepted intervals into matches ordered by start position
pub fn assemble(text: &ScannedText<'_>, mut accepted: Vec<SubstringInterval>) -> Vec<PalindromeMatch> {
    accepted.sort_unstable_by_key(|interval| interval.start);

    accepted
        .into_iter()
        .map(|interval| {
            let (byte_start, byte_end) = text.byte_range(&interval);
            PalindromeMatch {
                interval,
                byte_start,
                byte_end,
                text: text.slice(&interval).to_string(),
            }
        })
        .collect()
}

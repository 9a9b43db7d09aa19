use super::tree::PalindromicTree;
use super::types::SubstringInterval;

/// Feed every position of the tree's text and collect the longest palindromic
/// suffix at each position whose length is at least `min_length`.
///
/// Candidates come out ordered by end position.
pub fn collect_candidates(tree: &mut PalindromicTree<'_>, min_length: usize) -> Vec<SubstringInterval> {
    let mut candidates = Vec::new();

    for position in 0..tree.text_len() {
        let node = tree.add_char_at(position);
        // Nodes returned here are never roots, so the length is at least 1
        let len = tree.len_of(node) as usize;
        if len >= min_length {
            candidates.push(SubstringInterval::new(position + 1 - len, position));
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates_of(s: &str, min_length: usize) -> Vec<(usize, usize)> {
        let chars: Vec<char> = s.chars().collect();
        let mut tree = PalindromicTree::new(&chars);
        collect_candidates(&mut tree, min_length)
            .into_iter()
            .map(|c| (c.start, c.end))
            .collect()
    }

    #[test]
    fn test_ababa_candidates() {
        // aba ending at 2, bab at 3, ababa at 4
        assert_eq!(candidates_of("ababa", 3), vec![(0, 2), (1, 3), (0, 4)]);
    }

    #[test]
    fn test_no_candidates() {
        assert!(candidates_of("abcdefg12345", 3).is_empty());
        assert!(candidates_of("", 3).is_empty());
    }

    #[test]
    fn test_min_length_filter() {
        assert_eq!(candidates_of("abba", 3), vec![(0, 3)]);
        assert_eq!(candidates_of("abba", 2), vec![(1, 2), (0, 3)]);
        assert_eq!(candidates_of("ab", 1), vec![(0, 0), (1, 1)]);
    }
}

//! Palindromic tree (eertree)
//!
//! Online construction over a sequence of code points. Each call to
//! [`PalindromicTree::add_char_at`] extends the processed prefix by one
//! character and returns the node of the longest palindromic suffix ending
//! there. Total work is amortized linear in the text length.
//!
//! Nodes live in an arena indexed by [`NodeId`]:
//! - `0` is the imaginary root (length -1). Appending `c` to it yields `c`.
//! - `1` is the empty root (length 0). Appending `c` to it yields `cc`.
//!
//! Both roots use the imaginary root as their suffix link.

use super::types::NodeId;
use rustc_hash::FxHashMap;

const IMAGINARY_ROOT: NodeId = 0;
const EMPTY_ROOT: NodeId = 1;

/// One distinct palindrome (or a root)
#[derive(Debug)]
struct PalindromeNode {
    /// Palindrome length; -1 and 0 for the roots
    len: isize,
    /// Node of the longest palindromic proper suffix
    suffix_link: NodeId,
    /// `c -> node` where node is `c + self + c`
    transitions: FxHashMap<char, NodeId>,
}

impl PalindromeNode {
    fn new(len: isize, suffix_link: NodeId) -> Self {
        Self {
            len,
            suffix_link,
            transitions: FxHashMap::default(),
        }
    }
}

/// Palindromic tree built incrementally over a borrowed text
pub struct PalindromicTree<'a> {
    text: &'a [char],
    nodes: Vec<PalindromeNode>,
    /// Node of the longest palindromic suffix of the processed prefix
    longest_suffix: NodeId,
    /// Next position `add_char_at` expects
    next_position: usize,
}

impl<'a> PalindromicTree<'a> {
    pub fn new(text: &'a [char]) -> Self {
        // Every position adds at most one node
        let mut nodes = Vec::with_capacity(text.len() + 2);
        nodes.push(PalindromeNode::new(-1, IMAGINARY_ROOT));
        nodes.push(PalindromeNode::new(0, IMAGINARY_ROOT));

        Self {
            text,
            nodes,
            longest_suffix: EMPTY_ROOT,
            next_position: 0,
        }
    }

    /// Ingest the character at `position` and return the node of the longest
    /// palindromic suffix ending there.
    ///
    /// Positions must be fed in order: 0, 1, 2, ...
    pub fn add_char_at(&mut self, position: usize) -> NodeId {
        debug_assert_eq!(
            position, self.next_position,
            "positions must be added in increasing order"
        );
        self.next_position = position + 1;

        let ch = self.text[position];
        let parent = self.find_extendable(self.longest_suffix, position, ch);

        if let Some(&existing) = self.nodes[parent].transitions.get(&ch) {
            self.longest_suffix = existing;
            return existing;
        }

        let node_id = self.nodes.len();
        let len = self.nodes[parent].len + 2;

        let suffix_link = if len == 1 {
            EMPTY_ROOT
        } else {
            // Strictly shorter than `parent`, so its transition on `ch`
            // was created at an earlier position
            let link_parent =
                self.find_extendable(self.nodes[parent].suffix_link, position, ch);
            self.nodes[link_parent].transitions[&ch]
        };

        self.nodes.push(PalindromeNode::new(len, suffix_link));
        self.nodes[parent].transitions.insert(ch, node_id);
        self.longest_suffix = node_id;

        tracing::trace!(node_id, len, suffix_link, position, "palindrome node created");

        node_id
    }

    /// Walk suffix links from `node` until the palindrome it represents can be
    /// wrapped with `ch` on both sides, ending at `position`.
    fn find_extendable(&self, mut node: NodeId, position: usize, ch: char) -> NodeId {
        loop {
            if node == IMAGINARY_ROOT {
                return node;
            }
            let mirrored = position as isize - 1 - self.nodes[node].len;
            if mirrored >= 0 && self.text[mirrored as usize] == ch {
                return node;
            }
            node = self.nodes[node].suffix_link;
        }
    }

    /// Palindrome length of a node (-1 and 0 for the roots)
    #[inline]
    pub fn len_of(&self, node: NodeId) -> isize {
        self.nodes[node].len
    }

    /// Node of the longest palindromic suffix of the processed prefix
    #[inline]
    pub fn longest_suffix(&self) -> NodeId {
        self.longest_suffix
    }

    /// Number of distinct non-empty palindromes seen so far
    #[inline]
    pub fn distinct_palindromes(&self) -> usize {
        self.nodes.len() - 2
    }

    /// Length of the borrowed text
    #[inline]
    pub fn text_len(&self) -> usize {
        self.text.len()
    }
}

use super::types::SubstringInterval;

/// A text decoded into code points, with the byte offset of each one so
/// intervals can be sliced back out of the original `&str`.
pub struct ScannedText<'a> {
    source: &'a str,
    chars: Vec<char>,
    /// Byte offset of each char, plus `source.len()` at the end
    offsets: Vec<usize>,
}

impl<'a> ScannedText<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut chars = Vec::with_capacity(source.len());
        let mut offsets = Vec::with_capacity(source.len() + 1);
        for (offset, ch) in source.char_indices() {
            chars.push(ch);
            offsets.push(offset);
        }
        offsets.push(source.len());

        Self {
            source,
            chars,
            offsets,
        }
    }

    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of code points
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Byte range `[start, end)` covered by an interval
    #[inline]
    pub fn byte_range(&self, interval: &SubstringInterval) -> (usize, usize) {
        (self.offsets[interval.start], self.offsets[interval.end + 1])
    }

    /// Slice of the original text covered by an interval
    pub fn slice(&self, interval: &SubstringInterval) -> &'a str {
        let (start, end) = self.byte_range(interval);
        &self.source[start..end]
    }
}

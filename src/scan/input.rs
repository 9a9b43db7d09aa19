use anyhow::{Context, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Raw bytes of a batch input: a memory-mapped file or a buffer read from a
/// stream
pub enum InputSource {
    Mapped(Mmap),
    Buffered(Vec<u8>),
}

impl InputSource {
    /// Memory-map a file. Empty files get an empty buffer instead.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        let len = file
            .metadata()
            .with_context(|| format!("Failed to stat {}", path.display()))?
            .len();

        if len == 0 {
            return Ok(Self::Buffered(Vec::new()));
        }

        let mmap = unsafe { Mmap::map(&file) }
            .with_context(|| format!("Failed to map {}", path.display()))?;
        Ok(Self::Mapped(mmap))
    }

    /// Read a whole stream into memory
    pub fn read_from(mut reader: impl Read) -> Result<Self> {
        let mut buf = Vec::new();
        reader
            .read_to_end(&mut buf)
            .context("Failed to read input")?;
        Ok(Self::Buffered(buf))
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Mapped(mmap) => &mmap[..],
            Self::Buffered(buf) => buf.as_slice(),
        }
    }
}

/// Split input into lines on `\n`, dropping a trailing `\r` from each.
///
/// A final line without a newline is kept; a trailing newline does not add an
/// empty line.
pub fn split_lines(input: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0;

    for end in memchr::memchr_iter(b'\n', input) {
        lines.push(trim_cr(&input[start..end]));
        start = end + 1;
    }
    if start < input.len() {
        lines.push(trim_cr(&input[start..]));
    }

    lines
}

#[inline]
fn trim_cr(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}

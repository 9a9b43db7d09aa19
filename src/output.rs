//! Output formatting for scan results

use crate::palindrome::{PalindromeMatch, ScanReport};
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Colored stdout for the given choice
pub fn stdout(choice: ColorChoice) -> StandardStream {
    StandardStream::stdout(choice)
}

/// Write the line-number prefix used for batch output
fn write_line_prefix<W: WriteColor>(out: &mut W, line: Option<usize>) -> io::Result<()> {
    if let Some(line_num) = line {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{}", line_num)?;
        out.reset()?;
        write!(out, ":")?;
    }
    Ok(())
}

/// Write one palindrome per line, each prefixed by its line number if given
pub fn write_palindromes<W: WriteColor>(
    out: &mut W,
    matches: &[PalindromeMatch],
    line: Option<usize>,
) -> io::Result<()> {
    for m in matches {
        write_line_prefix(out, line)?;
        writeln!(out, "{}", m.text)?;
    }
    Ok(())
}

/// Write the whole text with every selected palindrome highlighted
pub fn write_highlighted<W: WriteColor>(
    out: &mut W,
    text: &str,
    matches: &[PalindromeMatch],
    line: Option<usize>,
) -> io::Result<()> {
    write_line_prefix(out, line)?;

    let mut cursor = 0;
    for m in matches {
        // Text between palindromes
        if m.byte_start > cursor {
            write!(out, "{}", &text[cursor..m.byte_start])?;
        }

        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(out, "{}", &text[m.byte_start..m.byte_end])?;
        out.reset()?;

        cursor = m.byte_end;
    }

    if cursor < text.len() {
        write!(out, "{}", &text[cursor..])?;
    }

    writeln!(out)?;

    Ok(())
}

/// Write any serializable value as a single JSON line
pub fn write_json_line<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}

/// Write scan statistics followed by the selected palindromes
pub fn write_report<W: WriteColor>(out: &mut W, report: &ScanReport) -> io::Result<()> {
    writeln!(out, "Scan Statistics")?;
    writeln!(out, "===============")?;
    writeln!(out)?;
    writeln!(out, "Characters:           {}", report.char_count)?;
    writeln!(out, "Distinct palindromes: {}", report.distinct_palindromes)?;
    writeln!(out, "Candidates:           {}", report.candidate_count)?;
    writeln!(out, "Selected:             {}", report.matches.len())?;

    if report.matches.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "Selected palindromes:")?;
    for m in &report.matches {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "  {:>6}..{:<6}", m.interval.start, m.interval.end)?;
        out.reset()?;
        writeln!(out, " {}", m.text)?;
    }

    Ok(())
}

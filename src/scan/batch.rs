//! Line-oriented batch scanning
//!
//! Every line is an independent text with its own palindromic tree, so lines
//! are scanned in parallel with rayon and reported in input order.

use super::input::split_lines;
use crate::palindrome::{PalindromeError, PalindromeFinder, PalindromeMatch, ScanConfig};
use crate::utils::progress::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;

/// Reasons a single batch line could not be scanned
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error(transparent)]
    Palindrome(#[from] PalindromeError),
    #[error("line is not valid UTF-8")]
    NotUtf8,
    #[error("line has {chars} characters, limit is {limit}")]
    TooLong { chars: usize, limit: usize },
}

/// Outcome of scanning one line
#[derive(Debug, Clone)]
pub struct LineReport {
    /// 1-based line number
    pub line_number: usize,
    pub outcome: Result<Vec<PalindromeMatch>, LineError>,
}

impl LineReport {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Flattened, serializable view of this report
    pub fn to_record(&self) -> LineRecord<'_> {
        match &self.outcome {
            Ok(matches) => LineRecord {
                line: self.line_number,
                palindromes: matches.iter().map(|m| m.text.as_str()).collect(),
                error: None,
            },
            Err(e) => LineRecord {
                line: self.line_number,
                palindromes: Vec::new(),
                error: Some(e.to_string()),
            },
        }
    }
}

/// JSON-friendly form of a [`LineReport`]
#[derive(Debug, Serialize)]
pub struct LineRecord<'a> {
    pub line: usize,
    pub palindromes: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Totals over a batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub lines: usize,
    pub failed_lines: usize,
    pub palindromes: usize,
}

impl BatchSummary {
    pub fn from_reports(reports: &[LineReport]) -> Self {
        let mut summary = Self {
            lines: reports.len(),
            ..Default::default()
        };
        for report in reports {
            match &report.outcome {
                Ok(matches) => summary.palindromes += matches.len(),
                Err(_) => summary.failed_lines += 1,
            }
        }
        summary
    }
}

/// Scan a single line of raw bytes
pub fn scan_line(
    finder: &PalindromeFinder,
    line: &[u8],
) -> Result<Vec<PalindromeMatch>, LineError> {
    let text = std::str::from_utf8(line).map_err(|_| LineError::NotUtf8)?;

    let limit = finder.config().max_line_chars;
    let chars = text.chars().count();
    if chars > limit {
        return Err(LineError::TooLong { chars, limit });
    }

    Ok(finder.find_matches(text)?)
}

/// Scan every line of `input`, in parallel when `config.parallel` is set
pub fn scan_lines(input: &[u8], config: &ScanConfig, show_progress: bool) -> Vec<LineReport> {
    let lines = split_lines(input);
    let finder = PalindromeFinder::new(config.clone());

    let progress = if show_progress {
        let pb = ProgressBar::new(lines.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} lines")
        {
            pb.set_style(style.progress_chars("=>-"));
        }
        Some(pb)
    } else {
        None
    };

    let scan_one = |(index, line): (usize, &&[u8])| {
        let line_number = index + 1;
        let outcome = scan_line(&finder, line);
        if let Err(e) = &outcome {
            tracing::warn!(line = line_number, error = %e, "line rejected");
        }
        if let Some(pb) = &progress {
            pb.inc(1);
        }
        LineReport {
            line_number,
            outcome,
        }
    };

    let reports: Vec<LineReport> = if config.parallel {
        lines.par_iter().enumerate().map(scan_one).collect()
    } else {
        lines.iter().enumerate().map(scan_one).collect()
    };

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    tracing::info!(lines = reports.len(), parallel = config.parallel, "batch scanned");

    reports
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(report: &LineReport) -> Vec<&str> {
        report.to_record().palindromes
    }

    #[test]
    fn test_scan_lines_in_order() {
        let input = b"aba\nabc-def\nabcba12321xyzzyx\n";
        let reports = scan_lines(input, &ScanConfig::default(), false);

        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].line_number, 1);
        assert_eq!(texts(&reports[0]), vec!["aba"]);
        assert_eq!(
            reports[1].outcome,
            Err(LineError::Palindrome(PalindromeError::InvalidCharacter {
                index: 3,
                character: '-'
            }))
        );
        assert_eq!(texts(&reports[2]), vec!["abcba", "12321", "xyzzyx"]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let input: String = (0..500)
            .map(|i| format!("x{i}racecar{i}y\n"))
            .collect();

        let parallel = scan_lines(input.as_bytes(), &ScanConfig::default(), false);
        let sequential = scan_lines(
            input.as_bytes(),
            &ScanConfig {
                parallel: false,
                ..Default::default()
            },
            false,
        );

        assert_eq!(parallel.len(), 500);
        for (p, s) in parallel.iter().zip(&sequential) {
            assert_eq!(p.line_number, s.line_number);
            assert_eq!(p.outcome, s.outcome);
        }
    }

    #[test]
    fn test_not_utf8() {
        let reports = scan_lines(b"ab\xffa\n", &ScanConfig::default(), false);
        assert_eq!(reports[0].outcome, Err(LineError::NotUtf8));
    }

    #[test]
    fn test_too_long() {
        let config = ScanConfig {
            max_line_chars: 4,
            ..Default::default()
        };
        let reports = scan_lines(b"abba\nabcba\n", &config, false);
        assert!(reports[0].is_ok());
        assert_eq!(
            reports[1].outcome,
            Err(LineError::TooLong { chars: 5, limit: 4 })
        );
    }

    #[test]
    fn test_empty_line_is_ok() {
        let reports = scan_lines(b"\naba\n", &ScanConfig::default(), false);
        assert_eq!(reports.len(), 2);
        assert!(texts(&reports[0]).is_empty());
        assert!(reports[0].is_ok());
    }

    #[test]
    fn test_summary_and_record() {
        let reports = scan_lines(b"aba\na b\nabacdc\n", &ScanConfig::default(), false);
        let summary = BatchSummary::from_reports(&reports);
        assert_eq!(
            summary,
            BatchSummary {
                lines: 3,
                failed_lines: 1,
                palindromes: 3,
            }
        );

        let json = serde_json::to_string(&reports[1].to_record()).unwrap();
        assert!(json.contains("\"line\":2"));
        assert!(json.contains("Invalid character at index 1"));

        let json = serde_json::to_string(&reports[0].to_record()).unwrap();
        assert_eq!(json, r#"{"line":1,"palindromes":["aba"]}"#);
    }
}

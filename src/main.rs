use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use palscan::output;
use palscan::palindrome::{PalindromeFinder, ScanConfig};
use palscan::scan::{BatchSummary, InputSource, scan_lines, split_lines};
use palscan::utils::init_logging;
use serde::Serialize;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use termcolor::ColorChoice;

#[derive(Parser)]
#[command(name = "palscan")]
#[command(about = "Split text into non-overlapping palindromes, longest first")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Texts to scan (reads lines from stdin when none are given)
    texts: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Plain, global = true)]
    format: Format,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    color: ColorMode,

    /// Shortest palindrome to report
    #[arg(long, global = true)]
    min_length: Option<usize>,

    /// JSON config file (flags override its values)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Scan batch lines on a single thread
    #[arg(long, global = true)]
    sequential: bool,

    /// Hide the progress bar
    #[arg(long, global = true)]
    no_progress: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan every line of a file
    File {
        /// Path to a text file with one input per line
        path: PathBuf,
    },
    /// Show palindromic tree statistics for a text
    Stats {
        /// Text to analyze
        text: String,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One palindrome per line
    Plain,
    /// The input with palindromes highlighted
    Highlight,
    /// JSON lines
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn choice(self) -> ColorChoice {
        match self {
            ColorMode::Auto if std::io::stdout().is_terminal() => ColorChoice::Auto,
            ColorMode::Auto => ColorChoice::Never,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

/// JSON output for a text given on the command line
#[derive(Serialize)]
struct TextRecord<'a> {
    text: &'a str,
    palindromes: Vec<&'a str>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = load_config(&cli)?;
    tracing::debug!(?config, "configuration loaded");

    let all_ok = match &cli.command {
        Some(Commands::File { path }) => {
            let source = InputSource::open(path)?;
            run_batch(&cli, &config, source.as_bytes(), !cli.no_progress)?
        }
        Some(Commands::Stats { text }) => run_stats(&cli, &config, text)?,
        None => {
            if cli.texts.is_empty() {
                let source = InputSource::read_from(std::io::stdin().lock())?;
                run_batch(&cli, &config, source.as_bytes(), false)?
            } else {
                run_texts(&cli, &config, &cli.texts)?
            }
        }
    };

    Ok(if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn load_config(cli: &Cli) -> Result<ScanConfig> {
    let mut config = match &cli.config {
        Some(path) => ScanConfig::load(path)?,
        None => ScanConfig::default(),
    };

    if let Some(min_length) = cli.min_length {
        config.min_length = min_length;
    }
    if cli.sequential {
        config.parallel = false;
    }

    Ok(config)
}

/// Scan texts given as arguments. Returns false if any was rejected.
fn run_texts(cli: &Cli, config: &ScanConfig, texts: &[String]) -> Result<bool> {
    let finder = PalindromeFinder::new(config.clone());
    let mut out = output::stdout(cli.color.choice());
    let mut all_ok = true;

    for text in texts {
        let matches = match finder.find_matches(text) {
            Ok(matches) => matches,
            Err(e) => {
                eprintln!("palscan: {:?}: {}", text, e);
                all_ok = false;
                continue;
            }
        };

        match cli.format {
            Format::Plain => output::write_palindromes(&mut out, &matches, None)?,
            Format::Highlight => output::write_highlighted(&mut out, text, &matches, None)?,
            Format::Json => {
                let record = TextRecord {
                    text,
                    palindromes: matches.iter().map(|m| m.text.as_str()).collect(),
                };
                output::write_json_line(&mut out, &record)?;
            }
        }
    }

    Ok(all_ok)
}

/// Scan line-oriented input. Returns false if any line was rejected.
fn run_batch(cli: &Cli, config: &ScanConfig, input: &[u8], show_progress: bool) -> Result<bool> {
    let reports = scan_lines(input, config, show_progress);
    let lines = split_lines(input);
    let mut out = output::stdout(cli.color.choice());

    for (report, line) in reports.iter().zip(&lines) {
        let matches = match &report.outcome {
            Ok(matches) => matches,
            Err(e) => {
                if cli.format == Format::Json {
                    output::write_json_line(&mut out, &report.to_record())?;
                } else {
                    eprintln!("palscan: line {}: {}", report.line_number, e);
                }
                continue;
            }
        };

        match cli.format {
            Format::Plain => {
                output::write_palindromes(&mut out, matches, Some(report.line_number))?
            }
            Format::Highlight => {
                // Only valid UTF-8 lines reach this point
                let text = std::str::from_utf8(line).context("Line is not valid UTF-8")?;
                output::write_highlighted(&mut out, text, matches, Some(report.line_number))?
            }
            Format::Json => output::write_json_line(&mut out, &report.to_record())?,
        }
    }

    let summary = BatchSummary::from_reports(&reports);
    tracing::info!(
        lines = summary.lines,
        failed = summary.failed_lines,
        palindromes = summary.palindromes,
        "batch complete"
    );

    Ok(summary.failed_lines == 0)
}

fn run_stats(cli: &Cli, config: &ScanConfig, text: &str) -> Result<bool> {
    let finder = PalindromeFinder::new(config.clone());
    let report = match finder.analyze(text) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("palscan: {:?}: {}", text, e);
            return Ok(false);
        }
    };

    let mut out = output::stdout(cli.color.choice());
    match cli.format {
        Format::Json => output::write_json_line(&mut out, &report)?,
        Format::Plain | Format::Highlight => output::write_report(&mut out, &report)?,
    }

    Ok(true)
}

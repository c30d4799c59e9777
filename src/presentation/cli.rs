//! Command-line surface of the `lexique` binary.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::application::{
    CheckOutcome, ExportConfig, ExportSummary, Exporter, Lexicon, Progress, DEFAULT_INPUT, DEFAULT_OUTPUT,
    DEFAULT_WORD_COLUMN,
};
use crate::domain::{LexiqueError, LexiqueResult};

#[derive(Parser, Debug)]
#[command(name = "lexique")]
#[command(about = "Export a spreadsheet word column to a sorted JSON lexicon")]
#[command(version)]
pub struct Cli {
    /// Defaults to `export` with default settings
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Read the word column of a workbook and write the lexicon JSON file
    Export(ExportArgs),

    /// Check a guess against a lexicon and record it when found
    Check {
        word: String,

        #[arg(long, default_value = DEFAULT_OUTPUT)]
        lexicon: PathBuf,
    },

    /// Read guesses from standard input, one per line, until end of input
    Play {
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        lexicon: PathBuf,
    },

    /// Show how many lexicon words have been found
    Progress {
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        lexicon: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Export(ExportArgs::default())
    }
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ExportArgs {
    /// Workbook to read (xlsx, xlsm, xlsb, xls, ods or csv)
    #[arg(long, short = 'i', default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// JSON file to write
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Zero-based index of the word column
    #[arg(long, default_value_t = DEFAULT_WORD_COLUMN)]
    pub column: usize,

    /// Treat sheet row 1 as a header and skip it
    #[arg(long)]
    pub skip_header: bool,

    /// Drop words that are empty after trimming
    #[arg(long)]
    pub skip_blank: bool,

    /// Field delimiter for CSV input
    #[arg(long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,
}

impl Default for ExportArgs {
    fn default() -> Self {
        ExportConfig::default().into()
    }
}

impl From<ExportConfig> for ExportArgs {
    fn from(config: ExportConfig) -> Self {
        Self {
            input: config.input,
            output: config.output,
            column: config.column,
            skip_header: config.skip_header,
            skip_blank: config.skip_blank,
            delimiter: config.delimiter,
        }
    }
}

impl From<ExportArgs> for ExportConfig {
    fn from(args: ExportArgs) -> Self {
        Self {
            input: args.input,
            output: args.output,
            column: args.column,
            skip_header: args.skip_header,
            skip_blank: args.skip_blank,
            delimiter: args.delimiter,
        }
    }
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(format!("delimiter must be a single ASCII character, got '{}'", value)),
    }
}

/// Runs `command` and returns the line to show the user.
pub fn run(command: Command) -> LexiqueResult<String> {
    match command {
        Command::Export(args) => {
            let summary = Exporter::new(args.into()).run()?;
            Ok(export_message(&summary))
        }
        Command::Check { word, lexicon: path } => {
            let mut lexicon = Lexicon::load(&path)?;
            let outcome = lexicon.check(&word);
            if matches!(outcome, CheckOutcome::Found(_)) {
                lexicon.save(&path)?;
            }
            Ok(check_message(&outcome, lexicon.progress()))
        }
        Command::Play { lexicon: path } => play(&path, io::stdin().lock(), io::stdout().lock()),
        Command::Progress { lexicon: path } => {
            let lexicon = Lexicon::load(&path)?;
            Ok(progress_message(lexicon.progress()))
        }
    }
}

/// Checks every line of `input` as a guess, answering on `output` and
/// saving the lexicon after each newly found word.
pub fn play<R: BufRead, W: Write>(path: &Path, input: R, mut output: W) -> LexiqueResult<String> {
    let mut lexicon = Lexicon::load(path)?;

    for line in input.lines() {
        let guess = line.map_err(|e| LexiqueError::file_access("<stdin>", e))?;
        let outcome = lexicon.check(&guess);
        if outcome == CheckOutcome::Ignored {
            continue;
        }
        if matches!(outcome, CheckOutcome::Found(_)) {
            lexicon.save(path)?;
        }
        writeln!(output, "{}", check_message(&outcome, lexicon.progress()))
            .map_err(|e| LexiqueError::file_write("<stdout>", e))?;
    }

    let mut summary = progress_message(lexicon.progress());
    if !lexicon.tried_words().is_empty() {
        summary.push_str(&format!("\nTried: {}", lexicon.tried_words().join(", ")));
    }
    Ok(summary)
}

pub fn export_message(summary: &ExportSummary) -> String {
    format!("Export complete: {} unique words sorted.", summary.written)
}

pub fn check_message(outcome: &CheckOutcome, progress: Progress) -> String {
    match outcome {
        CheckOutcome::Ignored => "Nothing to check.".to_string(),
        CheckOutcome::Unknown => "That word is not in the lexicon.".to_string(),
        CheckOutcome::AlreadyFound(word) => format!("'{}' has already been found.", word),
        CheckOutcome::Found(word) => format!("Found '{}'! {}", word, progress),
    }
}

pub fn progress_message(progress: Progress) -> String {
    format!("Words found: {}", progress)
}

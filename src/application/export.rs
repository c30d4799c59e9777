//! The spreadsheet-to-JSON export pipeline.
//!
//! Opens the workbook, extracts the word column row by row, deduplicates
//! the words, sorts them case-insensitively and writes the lexicon file.
//! Every failure aborts the run; nothing is written until all rows have
//! been read.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::domain::{build_records, LexiqueResult, Row, WordCollector, WordRow};
use crate::infrastructure::{FileRepository, Workbook};

pub const DEFAULT_INPUT: &str = "LexiqueFr.xlsx";
pub const DEFAULT_OUTPUT: &str = "LexiqueFr.json";
/// Third column (C).
pub const DEFAULT_WORD_COLUMN: usize = 2;

/// Settings for one export run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Zero-based index of the column holding the words
    pub column: usize,
    /// Drop sheet row 1
    pub skip_header: bool,
    /// Drop words that are empty after trimming
    pub skip_blank: bool,
    /// Field delimiter for CSV input
    pub delimiter: u8,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            column: DEFAULT_WORD_COLUMN,
            skip_header: false,
            skip_blank: false,
            delimiter: b',',
        }
    }
}

/// What an export run saw and produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub rows_read: usize,
    /// Rows whose word cell was empty
    pub null_cells: usize,
    /// Whitespace-only words, kept or dropped depending on `skip_blank`
    pub blank_words: usize,
    pub duplicates: usize,
    /// Number of records in the output file
    pub written: usize,
}

pub struct Exporter {
    config: ExportConfig,
}

impl Exporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Runs the whole pipeline and returns its summary.
    ///
    /// # Errors
    ///
    /// * [`LexiqueError::FileAccess`](crate::domain::LexiqueError::FileAccess) if the input cannot be opened or read
    /// * [`LexiqueError::DataShape`](crate::domain::LexiqueError::DataShape) if a row does not reach the word column
    /// * [`LexiqueError::FileWrite`](crate::domain::LexiqueError::FileWrite) if the output cannot be written
    pub fn run(&self) -> LexiqueResult<ExportSummary> {
        let mut workbook = Workbook::open(&self.config.input, self.config.delimiter)?;
        info!(
            path = %workbook.path().display(),
            sheet = workbook.sheet_name(),
            format = ?workbook.format(),
            "reading words"
        );

        let (words, mut summary) = collect_words(workbook.rows(), &self.config)?;
        let records = build_records(words.into_sorted());

        FileRepository::save_records(&records, &self.config.output)?;
        summary.written = records.len();
        Ok(summary)
    }
}

/// Extracts and deduplicates the word column of `rows`.
///
/// Rows with an empty word cell are skipped. Words are trimmed; a word
/// that is empty after trimming is kept unless `skip_blank` is set.
/// With `skip_header`, sheet row 1 is dropped whether or not it holds data.
pub fn collect_words<I>(rows: I, config: &ExportConfig) -> LexiqueResult<(WordCollector, ExportSummary)>
where
    I: IntoIterator<Item = LexiqueResult<Row>>,
{
    let mut words = WordCollector::new();
    let mut summary = ExportSummary::default();

    for row in rows {
        let row = row?;
        if config.skip_header && row.number == 1 {
            debug!("skipping header row");
            continue;
        }
        summary.rows_read += 1;

        let Some(word) = WordRow::from_row(&row, config.column)?.word else {
            summary.null_cells += 1;
            continue;
        };

        if word.is_empty() {
            summary.blank_words += 1;
            if config.skip_blank {
                debug!(row = row.number, "skipping blank word");
                continue;
            }
            warn!(row = row.number, "collecting blank word");
        }

        if !words.insert(word) {
            summary.duplicates += 1;
        }
    }

    debug!(
        rows = summary.rows_read,
        null = summary.null_cells,
        duplicates = summary.duplicates,
        unique = words.len(),
        "words collected"
    );
    Ok((words, summary))
}

//! Workbook loading.
//!
//! Spreadsheets (xlsx, xlsm, xlsb, xls, ods) are read through calamine,
//! which exposes the cached result of every formula rather than the
//! formula itself. Files with a `.csv` extension are read with the csv
//! crate so a plain export of the word list works as well.

use std::fs::File;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Range, Reader, SheetVisible};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use tracing::debug;

use crate::domain::{CellValue, LexiqueError, LexiqueResult, Row};

/// Kind of file backing a [`Workbook`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkbookFormat {
    Spreadsheet,
    Delimited,
}

enum Source {
    Sheet(Range<Data>),
    Delimited(csv::Reader<File>),
}

/// A read-only handle on the sheet the words are taken from.
pub struct Workbook {
    path: PathBuf,
    sheet: String,
    source: Source,
}

impl Workbook {
    /// Opens `path` and selects its active sheet.
    ///
    /// calamine does not report which tab was last active, so the first
    /// visible sheet in workbook order is used. `delimiter` only applies to
    /// CSV input.
    ///
    /// # Errors
    ///
    /// Returns [`LexiqueError::FileAccess`] if the file does not exist, is
    /// not a recognizable spreadsheet, or contains no sheets.
    pub fn open(path: &Path, delimiter: u8) -> LexiqueResult<Self> {
        if !path.is_file() {
            return Err(LexiqueError::file_access(path, "no such file"));
        }

        if is_csv(path) {
            let reader = csv::ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .delimiter(delimiter)
                .from_path(path)
                .map_err(|e| LexiqueError::file_access(path, e))?;
            let sheet = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();

            debug!(path = %path.display(), "opened delimited workbook");
            return Ok(Self {
                path: path.to_path_buf(),
                sheet,
                source: Source::Delimited(reader),
            });
        }

        let mut workbook = open_workbook_auto(path).map_err(|e| LexiqueError::file_access(path, e))?;

        let sheet = {
            let sheets = workbook.sheets_metadata();
            sheets
                .iter()
                .find(|s| matches!(s.visible, SheetVisible::Visible))
                .or_else(|| sheets.first())
                .map(|s| s.name.clone())
                .ok_or_else(|| LexiqueError::file_access(path, "workbook contains no sheets"))?
        };

        let range = workbook
            .worksheet_range(&sheet)
            .map_err(|e| LexiqueError::file_access(path, format!("cannot read sheet '{}': {}", sheet, e)))?;

        debug!(path = %path.display(), sheet = %sheet, size = ?range.get_size(), "opened spreadsheet");
        Ok(Self {
            path: path.to_path_buf(),
            sheet,
            source: Source::Sheet(range),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name of the selected sheet (the file stem for CSV input).
    pub fn sheet_name(&self) -> &str {
        &self.sheet
    }

    pub fn format(&self) -> WorkbookFormat {
        match self.source {
            Source::Sheet(_) => WorkbookFormat::Spreadsheet,
            Source::Delimited(_) => WorkbookFormat::Delimited,
        }
    }

    /// Iterates the rows of the sheet once, top to bottom.
    ///
    /// Cells are padded so that index 0 is always column A, even when the
    /// used range of the sheet starts further right.
    pub fn rows(&mut self) -> Box<dyn Iterator<Item = LexiqueResult<Row>> + '_> {
        let Workbook { ref path, ref mut source, .. } = *self;
        match source {
            Source::Sheet(range) => {
                let (first_row, first_col) = range.start().unwrap_or((0, 0));
                Box::new(range.rows().enumerate().map(move |(offset, cells)| {
                    let mut row = vec![CellValue::Empty; first_col as usize];
                    row.extend(cells.iter().map(cell_value));
                    Ok(Row::new(first_row as usize + offset + 1, row))
                }))
            }
            Source::Delimited(reader) => {
                let path = path.as_path();
                Box::new(reader.records().enumerate().map(move |(offset, record)| {
                    let record = record.map_err(|e| LexiqueError::file_access(path, e))?;
                    let cells = record
                        .iter()
                        .map(|field| {
                            if field.is_empty() {
                                CellValue::Empty
                            } else {
                                CellValue::Text(field.to_string())
                            }
                        })
                        .collect();
                    Ok(Row::new(offset + 1, cells))
                }))
            }
        }
    }
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(n) => CellValue::Integer(*n),
        Data::Float(n) => CellValue::Number(*n),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::DateTime(dt) => date_value(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Error(e.to_string()),
    }
}

const MICROS_PER_DAY: f64 = 86_400_000_000.0;

/// Converts a 1900-system date serial into a date, or a time of day for
/// serials below 1. Serials before 1900-03-01 account for the phantom
/// 1900-02-29 that spreadsheets count.
fn date_value(serial: f64) -> CellValue {
    if !(0.0..2_958_466.0).contains(&serial) {
        return CellValue::Number(serial);
    }

    let micros = (serial * MICROS_PER_DAY).round() as i64;
    if serial < 1.0 {
        let secs = (micros / 1_000_000) as u32;
        let nanos = (micros % 1_000_000) as u32 * 1_000;
        return NaiveTime::from_num_seconds_from_midnight_opt(secs, nanos)
            .map(CellValue::Time)
            .unwrap_or(CellValue::Number(serial));
    }

    let epoch = if serial < 60.0 { (1899, 12, 31) } else { (1899, 12, 30) };
    NaiveDate::from_ymd_opt(epoch.0, epoch.1, epoch.2)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .and_then(|start: NaiveDateTime| start.checked_add_signed(TimeDelta::microseconds(micros)))
        .map(CellValue::DateTime)
        .unwrap_or(CellValue::Number(serial))
}

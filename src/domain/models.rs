use std::fmt;

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::errors::{LexiqueError, LexiqueResult};

/// A single cell as read from a worksheet, after formulas have been
/// replaced by their cached results.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    DateTime(NaiveDateTime),
    /// Time of day without a date (serials below 1).
    Time(NaiveTime),
    /// Error literal such as `#DIV/0!`.
    Error(String),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Returns the cell rendered as text, or `None` for an empty cell.
    pub fn as_text(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Integer(n) => write!(f, "{}", n),
            CellValue::Number(n) => write!(f, "{}", format_number(*n)),
            CellValue::Boolean(b) => write!(f, "{}", if *b { "True" } else { "False" }),
            CellValue::DateTime(dt) => {
                write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S"))?;
                write_micros(f, dt.nanosecond())
            }
            CellValue::Time(t) => {
                write!(f, "{}", t.format("%H:%M:%S"))?;
                write_micros(f, t.nanosecond())
            }
            CellValue::Error(e) => write!(f, "{}", e),
        }
    }
}

fn write_micros(f: &mut fmt::Formatter<'_>, nanos: u32) -> fmt::Result {
    let micros = nanos / 1_000;
    if micros == 0 {
        Ok(())
    } else {
        write!(f, ".{:06}", micros)
    }
}

/// Renders a float the way the word list has always shown numbers:
/// integral values below 1e16 without a fraction, very large or very small
/// magnitudes in exponent form (`1e+20`, `1.5e-07`), everything else in
/// shortest decimal form.
fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return match n {
            n if n.is_nan() => "nan".to_string(),
            n if n > 0.0 => "inf".to_string(),
            _ => "-inf".to_string(),
        };
    }
    if n.fract() == 0.0 && n.abs() < 1e16 {
        return format!("{}", n as i64);
    }

    let scientific = format!("{:e}", n);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{}", n);
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if (-4..16).contains(&exponent) {
        format!("{}", n)
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}

/// One worksheet row. Cells are indexed by absolute column (A = 0).
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// 1-based row number in the source sheet
    pub number: usize,
    pub cells: Vec<CellValue>,
}

impl Row {
    pub fn new(number: usize, cells: Vec<CellValue>) -> Self {
        Self { number, cells }
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }
}

/// The word column of a row, validated against the row's shape.
#[derive(Debug, Clone, PartialEq)]
pub struct WordRow {
    pub number: usize,
    /// Trimmed cell text, `None` when the cell is empty
    pub word: Option<String>,
}

impl WordRow {
    /// Extracts the word at `column` from `row`.
    ///
    /// # Errors
    ///
    /// Returns [`LexiqueError::DataShape`] when the row does not reach `column`.
    pub fn from_row(row: &Row, column: usize) -> LexiqueResult<Self> {
        let cell = row.cells.get(column).ok_or(LexiqueError::DataShape {
            row: row.number,
            width: row.width(),
            column,
        })?;

        Ok(Self {
            number: row.number,
            word: cell.as_text().map(|text| text.trim().to_string()),
        })
    }
}

/// Output unit of the exported lexicon.
///
/// `found` starts out false; the word-hunt game flips it once a player
/// guesses the word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    pub found: bool,
}

impl WordRecord {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            found: false,
        }
    }
}

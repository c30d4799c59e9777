//! Lexique - spreadsheet word list exporter
//!
//! Reads one column of a spreadsheet, deduplicates and sorts the words
//! case-insensitively, and writes them as a JSON lexicon for a word-hunt
//! game.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;

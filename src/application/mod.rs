//! Application layer running the lexicon workflows.
//!
//! This module coordinates between the domain layer and the file system:
//! the spreadsheet export pipeline and the word-hunt lexicon state.

pub mod export;
pub mod lexicon;

pub use export::*;
pub use lexicon::*;

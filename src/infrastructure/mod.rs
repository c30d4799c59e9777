//! Infrastructure layer providing file system integrations.
//!
//! This module contains the workbook loader and the JSON persistence
//! of the exported lexicon.

pub mod loader;
pub mod persistence;

pub use loader::*;
pub use persistence::*;

//! Presentation layer handling the command line.
//!
//! This module parses arguments with clap, dispatches to the application
//! workflows and formats the messages shown to the user.

pub mod cli;

pub use cli::*;

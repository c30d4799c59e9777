//! Lexique - spreadsheet word list exporter
//!
//! Running the binary without arguments exports the third column of
//! `LexiqueFr.xlsx` to `LexiqueFr.json`. Set `RUST_LOG` for diagnostics.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lexique::presentation::{run, Cli};

/// Entry point for the lexique binary.
///
/// Installs the stderr log subscriber, parses the command line and runs
/// the selected command, printing its message on success.
///
/// # Errors
///
/// Returns the first error of the run; the process then exits non-zero.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    let message = run(cli.command.unwrap_or_default())?;
    println!("{message}");

    Ok(())
}

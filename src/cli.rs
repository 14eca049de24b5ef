//! CLI argument parsing for the autograder
//!
//! A single top-level command with no functional flags. clap supplies
//! --help and --version; --verbose only raises the log level.

use clap::Parser;

/// Run the pytest suite in `tests/` and write a Gradescope results.json
#[derive(Parser, Debug)]
#[command(name = "autograder")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Report pipeline progress and pytest exit status at debug level
    #[arg(long, short)]
    pub verbose: bool,
}

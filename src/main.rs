//! Autograder - pytest-to-Gradescope scoring pipeline
//!
//! Runs the pytest suite in `tests/`, then converts the JSON report
//! written by the pytest-json-report plugin into a Gradescope
//! `results.json`.

mod cli;
mod runner;

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use autograder_core::error::{ExitCode as GraderExitCode, Result};
use autograder_core::logging;
use autograder_core::report::{self, REPORT_FILE};
use autograder_core::score;

use cli::Cli;

/// Well-known path the grading platform reads results from.
const RESULTS_FILE: &str = "results.json";

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize structured logging
    if let Err(e) = logging::init_tracing(cli.verbose) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    match run() {
        Ok(()) => ExitCode::from(GraderExitCode::Success as u8),
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run() -> Result<()> {
    tracing::info!("starting pytest execution");
    runner::run_pytest();

    tracing::info!("processing pytest report");
    let report = report::load_report(Path::new(REPORT_FILE))?;
    let results = score::grade(&report);

    // No partial output: the file only appears once grading succeeded.
    let json = serde_json::to_string(&results)?;
    fs::write(RESULTS_FILE, json)?;

    tracing::info!(
        score = results.score,
        results_file = RESULTS_FILE,
        "finished"
    );
    Ok(())
}

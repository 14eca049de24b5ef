//! Error types and exit codes for the autograder
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 3: Data error (missing or malformed report artifact)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported to the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Data error - missing or unparseable report file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while grading a test run
#[derive(Error, Debug)]
pub enum GraderError {
    // Data errors (exit code 3)
    #[error("report file not found at {path:?}; make sure pytest generated it")]
    ReportNotFound { path: PathBuf },

    #[error("malformed test report: {0}")]
    MalformedReport(#[from] serde_json::Error),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraderError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraderError::ReportNotFound { .. } | GraderError::MalformedReport(_) => ExitCode::Data,
            GraderError::Io(_) => ExitCode::Failure,
        }
    }
}

pub type Result<T> = std::result::Result<T, GraderError>;

//! pytest JSON report data model
//!
//! Mirrors the subset of the pytest-json-report schema the grader consumes.
//! Absent fields default the way the plugin treats them: missing counts are
//! zero, a missing test list is empty.

use std::path::Path;

use serde::Deserialize;

use crate::error::{GraderError, Result};

/// Well-known path the test runner is asked to write its report to.
pub const REPORT_FILE: &str = "report.json";

/// Parsed report produced by a single pytest run.
#[derive(Debug, Default, Deserialize)]
pub struct TestReport {
    #[serde(default)]
    pub summary: Summary,
    #[serde(default)]
    pub tests: Vec<TestCase>,
}

/// Outcome counts from the report's `summary` block.
#[derive(Debug, Default, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub passed: u32,
    #[serde(default)]
    pub failed: u32,
    #[serde(default)]
    pub errors: u32,
    #[serde(default)]
    pub skipped: u32,
}

impl Summary {
    /// Total test count, for human-readable reporting only.
    pub fn total(&self) -> u32 {
        self.passed + self.failed + self.errors + self.skipped
    }
}

/// One test execution from the report's `tests` list.
#[derive(Debug, Clone, Deserialize)]
pub struct TestCase {
    #[serde(default = "unknown_nodeid")]
    pub nodeid: String,
    #[serde(default)]
    pub outcome: Outcome,
    /// Diagnostic detail for failing/erroring tests. Free text, may be absent.
    pub longrepr: Option<String>,
}

fn unknown_nodeid() -> String {
    "unknown test".to_string()
}

/// Categorical result of one test execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    Failed,
    Error,
    Skipped,
    /// Anything else the plugin may emit (xfailed, xpassed, ...).
    /// Never deducted against.
    #[default]
    #[serde(other)]
    Other,
}

impl Outcome {
    /// Capitalized label used in per-test output text.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Passed => "Passed",
            Outcome::Failed => "Failed",
            Outcome::Error => "Error",
            Outcome::Skipped => "Skipped",
            Outcome::Other => "Unknown",
        }
    }

    /// Whether this outcome costs points.
    pub fn is_deducting(&self) -> bool {
        matches!(self, Outcome::Failed | Outcome::Error)
    }
}

/// Load and parse a previously produced report file.
///
/// A missing file is a hard precondition failure, checked before opening;
/// a parse failure propagates the underlying serde error.
pub fn load_report(path: &Path) -> Result<TestReport> {
    if !path.exists() {
        return Err(GraderError::ReportNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path)?;
    let report: TestReport = serde_json::from_str(&contents)?;
    tracing::debug!(
        passed = report.summary.passed,
        failed = report.summary.failed,
        errors = report.summary.errors,
        skipped = report.summary.skipped,
        "loaded report"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraderError;

    #[test]
    fn parses_full_report() {
        let json = r#"{
            "summary": {"passed": 3, "failed": 1, "errors": 0, "skipped": 2},
            "tests": [
                {"nodeid": "tests/test_app.py::test_ok", "outcome": "passed"},
                {"nodeid": "tests/test_app.py::test_bad", "outcome": "failed",
                 "longrepr": "AssertionError: 1 != 2"}
            ]
        }"#;

        let report: TestReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.summary.passed, 3);
        assert_eq!(report.summary.failed, 1);
        assert_eq!(report.summary.total(), 6);
        assert_eq!(report.tests.len(), 2);
        assert_eq!(report.tests[1].outcome, Outcome::Failed);
        assert_eq!(
            report.tests[1].longrepr.as_deref(),
            Some("AssertionError: 1 != 2")
        );
    }

    #[test]
    fn missing_summary_and_tests_default_to_empty() {
        let report: TestReport = serde_json::from_str("{}").unwrap();
        assert_eq!(report.summary.total(), 0);
        assert!(report.tests.is_empty());
    }

    #[test]
    fn missing_summary_categories_default_to_zero() {
        let report: TestReport =
            serde_json::from_str(r#"{"summary": {"passed": 4}, "tests": []}"#).unwrap();
        assert_eq!(report.summary.passed, 4);
        assert_eq!(report.summary.failed, 0);
        assert_eq!(report.summary.errors, 0);
        assert_eq!(report.summary.skipped, 0);
    }

    #[test]
    fn negative_count_is_a_parse_error() {
        let result =
            serde_json::from_str::<TestReport>(r#"{"summary": {"passed": -1}, "tests": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_outcome_is_tolerated_and_non_deducting() {
        let report: TestReport = serde_json::from_str(
            r#"{"tests": [{"nodeid": "t::xf", "outcome": "xfailed"}]}"#,
        )
        .unwrap();
        assert_eq!(report.tests[0].outcome, Outcome::Other);
        assert!(!report.tests[0].outcome.is_deducting());
    }

    #[test]
    fn missing_nodeid_and_outcome_get_defaults() {
        let report: TestReport = serde_json::from_str(r#"{"tests": [{}]}"#).unwrap();
        assert_eq!(report.tests[0].nodeid, "unknown test");
        assert_eq!(report.tests[0].outcome, Outcome::Other);
        assert!(report.tests[0].longrepr.is_none());
    }

    #[test]
    fn load_report_missing_file_is_report_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(REPORT_FILE);

        let err = load_report(&path).unwrap_err();
        assert!(matches!(err, GraderError::ReportNotFound { .. }));
    }

    #[test]
    fn load_report_garbage_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(REPORT_FILE);
        std::fs::write(&path, "{ definitely not json").unwrap();

        let err = load_report(&path).unwrap_err();
        assert!(matches!(err, GraderError::MalformedReport(_)));
    }

    #[test]
    fn load_report_round_trips_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(REPORT_FILE);
        std::fs::write(&path, r#"{"summary": {"passed": 2}, "tests": []}"#).unwrap();

        let report = load_report(&path).unwrap();
        assert_eq!(report.summary.passed, 2);
    }
}

//! Deduction-based scoring over a parsed test report
//!
//! Pure functions with no I/O: every failed or errored test costs a fixed
//! penalty, the score saturates at zero, and skipped tests neither help
//! nor hurt.

use serde::Serialize;

use crate::report::TestReport;

/// Total points available for a run.
pub const MAX_SCORE: u32 = 100;

/// Points deducted for each failed or errored test.
pub const PENALTY_PER_FAIL: u32 = 10;

/// Placeholder used when a failing test carries no traceback.
const NO_TRACEBACK: &str = "No traceback available";

/// Results document consumed by the grading platform.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ScoreReport {
    pub score: u32,
    pub max_score: u32,
    pub tests: Vec<TestDetail>,
}

/// One entry in the results document: a failing test, or the single
/// trailing summary.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TestDetail {
    pub name: String,
    pub score: u32,
    pub max_score: u32,
    pub output: String,
}

/// Compute the aggregate score and per-test detail list for a report.
///
/// The score comes from the summary counts alone; the test list only
/// drives the detail entries, which keep their source order. Exactly one
/// summary entry is appended last.
pub fn grade(report: &TestReport) -> ScoreReport {
    let summary = &report.summary;

    let deductions = PENALTY_PER_FAIL.saturating_mul(summary.failed + summary.errors);
    let score = MAX_SCORE.saturating_sub(deductions);

    let mut tests: Vec<TestDetail> = report
        .tests
        .iter()
        .filter(|test| test.outcome.is_deducting())
        .map(|test| TestDetail {
            name: test.nodeid.clone(),
            score: 0,
            max_score: PENALTY_PER_FAIL,
            output: format!(
                "{}:\n{}",
                test.outcome.label(),
                test.longrepr.as_deref().unwrap_or(NO_TRACEBACK)
            ),
        })
        .collect();

    tests.push(TestDetail {
        name: "Summary".to_string(),
        score,
        max_score: MAX_SCORE,
        output: format!(
            "{} tests passed out of {} total tests.",
            summary.passed,
            summary.total()
        ),
    });

    ScoreReport {
        score,
        max_score: MAX_SCORE,
        tests,
    }
}

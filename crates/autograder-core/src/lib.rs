//! Autograder Core Library
//!
//! Pure domain logic for the pytest autograder: the report data model,
//! the deduction-based scoring rule, and the shared error taxonomy.
//! Scoring is a pure function over a parsed report, so it is directly
//! unit-testable without running a real test suite.

pub mod error;
pub mod logging;
pub mod report;
pub mod score;

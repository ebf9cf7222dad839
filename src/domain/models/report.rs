//! The run-level result store and its aggregate summary.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::outcome::TestResult;
use super::suite::Category;

/// Full record of one orchestrator run.
///
/// Results are inserted as each test completes; the summary is attached
/// once at the end. Field declaration order fixes the serialized key
/// order: timestamp, unit_tests, integration_tests, examples, summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// When the run started.
    pub timestamp: DateTime<Utc>,

    /// Unit-test results keyed by test name.
    pub unit_tests: BTreeMap<String, TestResult>,

    /// Integration-test results keyed by test name.
    pub integration_tests: BTreeMap<String, TestResult>,

    /// Example results keyed by example name.
    pub examples: BTreeMap<String, TestResult>,

    /// Aggregate verdict; absent until computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<RunSummary>,
}

impl RunReport {
    /// Empty store stamped with the current time.
    #[must_use]
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    /// Empty store with an explicit timestamp.
    #[must_use]
    pub const fn at(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            unit_tests: BTreeMap::new(),
            integration_tests: BTreeMap::new(),
            examples: BTreeMap::new(),
            summary: None,
        }
    }

    /// Result mapping for one category.
    #[must_use]
    pub const fn category(&self, category: Category) -> &BTreeMap<String, TestResult> {
        match category {
            Category::Unit => &self.unit_tests,
            Category::Integration => &self.integration_tests,
            Category::Example => &self.examples,
        }
    }

    /// Insert a result under its category, keyed by test name.
    pub fn record(&mut self, category: Category, result: TestResult) {
        let results = match category {
            Category::Unit => &mut self.unit_tests,
            Category::Integration => &mut self.integration_tests,
            Category::Example => &mut self.examples,
        };
        results.insert(result.name.clone(), result);
    }
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Pass/total accounting for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// Number of executables that produced a result.
    pub total: usize,

    /// Number of results with status PASSED.
    pub passed: usize,
}

impl CategoryCount {
    /// True when every recorded result passed (vacuously true when empty).
    #[must_use]
    pub const fn all_passed(self) -> bool {
        self.passed == self.total
    }
}

/// Overall verdict for the run, gated by unit and integration tests only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverallStatus {
    /// Every unit and integration test passed.
    Passed,
    /// At least one unit or integration test did not pass.
    Failed,
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Passed => "PASSED",
            Self::Failed => "FAILED",
        };
        f.write_str(s)
    }
}

/// Aggregate counts and the gating verdict, derived from a `RunReport`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Gated tests in the run (unit + integration; examples excluded).
    pub total_tests: usize,

    /// Gated tests that passed.
    pub passed_tests: usize,

    /// Unit-test counts.
    pub unit_tests: CategoryCount,

    /// Integration-test counts.
    pub integration_tests: CategoryCount,

    /// Example counts. Reported only; never gate the verdict.
    pub examples: CategoryCount,

    /// PASSED iff every unit and integration test passed.
    pub overall_status: OverallStatus,
}

impl RunSummary {
    /// Gated tests that did not pass (FAILED, TIMEOUT, or ERROR).
    #[must_use]
    pub const fn failed_tests(&self) -> usize {
        self.total_tests - self.passed_tests
    }
}

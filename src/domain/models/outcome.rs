//! Per-test outcome classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of one executable's run.
///
/// Every way a test invocation can end maps to exactly one variant, so
/// callers handle outcomes by matching rather than catching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestStatus {
    /// Process exited with code 0.
    Passed,
    /// Process exited with a nonzero code.
    Failed,
    /// Process exceeded the wall-clock bound and was killed.
    Timeout,
    /// Process could not be launched or waited on.
    Error,
}

impl TestStatus {
    /// True only for a clean zero exit.
    #[must_use]
    pub const fn is_passed(self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Status word as it appears in reports ("PASSED", "FAILED", ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Passed => "PASSED",
            Self::Failed => "FAILED",
            Self::Timeout => "TIMEOUT",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of running a single test executable.
///
/// Produced once by the executor and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    /// Logical test name (the executable file name).
    pub name: String,

    /// Outcome classification.
    pub status: TestStatus,

    /// Process exit code. -1 for timeouts, launch errors, and processes
    /// killed by a signal.
    pub return_code: i32,

    /// Captured standard output, lossily decoded as UTF-8.
    pub stdout: String,

    /// Captured standard error, or the failure diagnostic for timeouts
    /// and launch errors.
    pub stderr: String,
}

impl TestResult {
    /// Result for a process that ran to completion.
    ///
    /// Exit code 0 classifies as `Passed`, anything else as `Failed`.
    pub fn completed(
        name: impl Into<String>,
        return_code: i32,
        stdout: String,
        stderr: String,
    ) -> Self {
        let status = if return_code == 0 {
            TestStatus::Passed
        } else {
            TestStatus::Failed
        };
        Self {
            name: name.into(),
            status,
            return_code,
            stdout,
            stderr,
        }
    }

    /// Result for a process that exceeded the wall-clock bound.
    pub fn timed_out(name: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            name: name.into(),
            status: TestStatus::Timeout,
            return_code: -1,
            stdout: String::new(),
            stderr: format!("Test timeout after {timeout_secs} seconds"),
        }
    }

    /// Result for an executable that could not be launched at all.
    pub fn launch_error(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: TestStatus::Error,
            return_code: -1,
            stdout: String::new(),
            stderr: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_zero_exit_passes() {
        let result = TestResult::completed("test_types", 0, "ok\n".to_string(), String::new());
        assert_eq!(result.status, TestStatus::Passed);
        assert_eq!(result.return_code, 0);
        assert_eq!(result.stdout, "ok\n");
    }

    #[test]
    fn test_completed_nonzero_exit_fails() {
        let result = TestResult::completed("test_web", 2, String::new(), "boom".to_string());
        assert_eq!(result.status, TestStatus::Failed);
        assert_eq!(result.return_code, 2);
        assert_eq!(result.stderr, "boom");
    }

    #[test]
    fn test_timed_out_names_duration() {
        let result = TestResult::timed_out("test_slow", 30);
        assert_eq!(result.status, TestStatus::Timeout);
        assert_eq!(result.return_code, -1);
        assert!(result.stdout.is_empty());
        assert_eq!(result.stderr, "Test timeout after 30 seconds");
    }

    #[test]
    fn test_launch_error_carries_message() {
        let result = TestResult::launch_error("test_gone", "No such file or directory");
        assert_eq!(result.status, TestStatus::Error);
        assert_eq!(result.return_code, -1);
        assert!(result.stdout.is_empty());
        assert_eq!(result.stderr, "No such file or directory");
    }

    #[test]
    fn test_status_serializes_screaming() {
        let json = serde_json::to_value(TestStatus::Passed).unwrap();
        assert_eq!(json, serde_json::json!("PASSED"));
        let json = serde_json::to_value(TestStatus::Timeout).unwrap();
        assert_eq!(json, serde_json::json!("TIMEOUT"));
    }

    #[test]
    fn test_status_display_matches_serialization() {
        for status in [
            TestStatus::Passed,
            TestStatus::Failed,
            TestStatus::Timeout,
            TestStatus::Error,
        ] {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, serde_json::json!(status.to_string()));
        }
    }
}

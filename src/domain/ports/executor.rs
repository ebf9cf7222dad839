//! Executor port - interface for running one test executable.

use std::path::Path;

use async_trait::async_trait;

use crate::domain::models::TestResult;

/// Trait for test executor implementations.
///
/// An executor runs a single executable to completion and classifies the
/// outcome. It is infallible by construction: launch failures and
/// timeouts come back as `TestStatus::Error` / `TestStatus::Timeout`
/// results, never as errors, so callers cannot forget a failure path.
#[async_trait]
pub trait TestExecutor: Send + Sync {
    /// Run one executable with no arguments and classify the outcome.
    ///
    /// Suspends until the process exits, fails to launch, or hits the
    /// executor's timeout. The child is fully reaped before this
    /// returns; no process is left running.
    async fn execute(&self, name: &str, path: &Path) -> TestResult;
}

//! Command-line interface layer.

pub mod render;
pub mod run;
pub mod types;

use std::process::ExitCode;

use crate::domain::models::OverallStatus;

pub use types::Cli;

/// Print a fatal error and produce the failure exit code.
///
/// Reserved for run-level failures; per-test failures are statuses
/// inside the report, never errors.
pub fn handle_error(err: &anyhow::Error) -> ExitCode {
    eprintln!("❌ Error: {err:#}");
    ExitCode::FAILURE
}

/// Map the overall verdict to the process exit code.
///
/// The default contract is permissive: a FAILED verdict still exits 0
/// and the JSON report carries the result. `--strict` turns FAILED
/// into a failure exit.
#[must_use]
pub const fn exit_code(verdict: OverallStatus, strict: bool) -> ExitCode {
    if strict && matches!(verdict, OverallStatus::Failed) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

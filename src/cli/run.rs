//! The run command: resolve config, execute the plan, report, persist.

use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::cli::render::{self, ConsoleSink};
use crate::cli::types::Cli;
use crate::domain::errors::DomainError;
use crate::domain::models::OverallStatus;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::process::ProcessExecutor;
use crate::infrastructure::report::write_report;
use crate::services::aggregator::summarize;
use crate::services::SuiteRunner;

/// Execute a full orchestration run and return the overall verdict.
///
/// Fails only for run-level conditions: unreadable configuration, a
/// missing build directory (before any test runs), or an unwritable
/// report file. Per-test failures land in the report, not here.
pub async fn execute(cli: Cli) -> Result<OverallStatus> {
    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    if let Some(build_dir) = cli.build_dir {
        config.build_dir = build_dir;
    }
    debug!(
        build_dir = %config.build_dir.display(),
        timeout_secs = config.timeout_secs,
        planned = config.suite.len(),
        "configuration resolved"
    );

    if !config.build_dir.exists() {
        return Err(DomainError::BuildDirNotFound(config.build_dir).into());
    }

    println!("Starting test suite...");

    let executor = Arc::new(ProcessExecutor::new(config.timeout()));
    let runner = SuiteRunner::new(
        config.build_dir.clone(),
        config.suite.clone(),
        executor,
        Arc::new(ConsoleSink),
    );
    let mut report = runner.run().await;

    let summary = summarize(&report);
    report.summary = Some(summary.clone());
    render::print_report(report.timestamp, &summary);

    let report_path = config.report_path();
    write_report(&report, &report_path)?;
    render::print_saved(&report_path);

    Ok(summary.overall_status)
}

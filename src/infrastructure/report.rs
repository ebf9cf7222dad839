//! Report persistence.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::RunReport;

/// Serialize the full result store to `path` as pretty-printed JSON,
/// overwriting any existing file.
///
/// The store is written verbatim: timestamp, every per-test result with
/// its captured streams, and the attached summary.
pub fn write_report(report: &RunReport, path: &Path) -> DomainResult<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, format!("{json}\n")).map_err(|source| DomainError::ReportWrite {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "report written");
    Ok(())
}

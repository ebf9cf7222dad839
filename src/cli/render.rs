//! Console rendering: streaming progress lines and the final report block.

use std::fmt::Write as _;
use std::path::Path;

use chrono::{DateTime, Utc};
use console::style;

use crate::domain::models::{Category, OverallStatus, RunSummary, TestStatus};
use crate::domain::ports::{ProgressEvent, ProgressSink};

/// Width of the report banner.
const BANNER_WIDTH: usize = 60;

/// Heading printed when a category pass starts.
const fn category_heading(category: Category) -> &'static str {
    match category {
        Category::Unit => "🧪 Running unit tests...",
        Category::Integration => "🔗 Running integration tests...",
        Category::Example => "📚 Running examples...",
    }
}

/// One line per executed test, glyph first.
fn finished_line(name: &str, status: TestStatus) -> String {
    let glyph = if status.is_passed() { "✅" } else { "❌" };
    format!("  {glyph} {name}: {status}")
}

/// Notice for a planned executable missing from the build tree.
fn missing_line(name: &str) -> String {
    format!("  ⚠️  {name}: not found")
}

/// Prints one line per progress event, mirroring the runner's pace.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ProgressSink for ConsoleSink {
    fn on_event(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::CategoryStarted(category) => {
                println!();
                println!("{}", category_heading(*category));
            }
            ProgressEvent::TestFinished { name, status, .. } => {
                println!("{}", finished_line(name, *status));
            }
            ProgressEvent::TestMissing { name, .. } => {
                println!("{}", missing_line(name));
            }
        }
    }
}

/// The banner-bounded report block as a single string.
fn report_block(timestamp: DateTime<Utc>, summary: &RunSummary) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let overall = match summary.overall_status {
        OverallStatus::Passed => style("PASSED").green(),
        OverallStatus::Failed => style("FAILED").red(),
    };

    let mut block = String::new();
    let _ = writeln!(block, "{banner}");
    let _ = writeln!(block, "📊 Test Report");
    let _ = writeln!(block, "{banner}");
    let _ = writeln!(block, "Timestamp: {}", timestamp.to_rfc3339());
    let _ = writeln!(block);
    let _ = writeln!(block, "Overall status: {overall}");
    let _ = writeln!(block, "Total tests: {}", summary.total_tests);
    let _ = writeln!(block, "Passed: {}", summary.passed_tests);
    let _ = writeln!(block, "Failed: {}", summary.failed_tests());
    let _ = writeln!(block);
    let _ = writeln!(
        block,
        "Unit tests: {}/{} passed",
        summary.unit_tests.passed, summary.unit_tests.total
    );
    let _ = writeln!(
        block,
        "Integration tests: {}/{} passed",
        summary.integration_tests.passed, summary.integration_tests.total
    );
    let _ = writeln!(
        block,
        "Examples: {}/{} passed",
        summary.examples.passed, summary.examples.total
    );
    let _ = writeln!(block, "{banner}");
    block
}

/// Print the aggregate report block, preceded by a blank separator line.
pub fn print_report(timestamp: DateTime<Utc>, summary: &RunSummary) {
    println!();
    print!("{}", report_block(timestamp, summary));
}

/// Confirm where the JSON report landed.
pub fn print_saved(path: &Path) {
    println!();
    println!("✅ Results saved to: {}", path.display());
}

//! Summary computation over a filled result store.

use std::collections::BTreeMap;

use crate::domain::models::{CategoryCount, OverallStatus, RunReport, RunSummary, TestResult};

/// Compute the aggregate verdict for a run.
///
/// Pure function of the three category mappings. It never reads an
/// already-attached summary, so recomputing on an unchanged store
/// yields an identical value. Run-level totals count unit and
/// integration tests only; examples get their own block but never gate
/// the verdict.
#[must_use]
pub fn summarize(report: &RunReport) -> RunSummary {
    let unit_tests = count(&report.unit_tests);
    let integration_tests = count(&report.integration_tests);
    let examples = count(&report.examples);

    let overall_status = if unit_tests.all_passed() && integration_tests.all_passed() {
        OverallStatus::Passed
    } else {
        OverallStatus::Failed
    };

    RunSummary {
        total_tests: unit_tests.total + integration_tests.total,
        passed_tests: unit_tests.passed + integration_tests.passed,
        unit_tests,
        integration_tests,
        examples,
        overall_status,
    }
}

fn count(results: &BTreeMap<String, TestResult>) -> CategoryCount {
    CategoryCount {
        total: results.len(),
        passed: results
            .values()
            .filter(|result| result.status.is_passed())
            .count(),
    }
}

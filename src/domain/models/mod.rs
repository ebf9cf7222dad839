//! Domain models for runs, results, and configuration.

pub mod config;
pub mod outcome;
pub mod report;
pub mod suite;

pub use config::Config;
pub use outcome::{TestResult, TestStatus};
pub use report::{CategoryCount, OverallStatus, RunReport, RunSummary};
pub use suite::{Category, SuiteEntry};

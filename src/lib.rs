//! Proctor - Test Suite Orchestrator
//!
//! Proctor runs the compiled test and example executables a build tree
//! already contains, one subprocess at a time under a timeout, and rolls
//! the outcomes into a console report and a JSON report file. Each
//! executable is an opaque pass/fail unit identified only by its exit
//! code.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Result and report models, executor and
//!   progress ports, errors
//! - **Service Layer** (`services`): The suite runner and summary
//!   aggregation
//! - **Infrastructure Layer** (`infrastructure`): Subprocess execution,
//!   configuration loading, report persistence
//! - **CLI Layer** (`cli`): Command-line surface and console rendering

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    Category, Config, OverallStatus, RunReport, RunSummary, SuiteEntry, TestResult, TestStatus,
};
pub use services::SuiteRunner;

//! Service layer orchestrating the run.

pub mod aggregator;
pub mod suite_runner;

pub use suite_runner::SuiteRunner;

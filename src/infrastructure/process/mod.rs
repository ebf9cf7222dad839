//! Subprocess execution adapter.

pub mod executor;

pub use executor::ProcessExecutor;

//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the trait interfaces that adapters implement:
//! - `TestExecutor`: runs one executable and classifies the outcome
//! - `ProgressSink`: consumes streaming per-test feedback
//!
//! These traits keep the runner independent of the OS process machinery
//! and of the console.

pub mod executor;
pub mod progress;

pub use executor::TestExecutor;
pub use progress::{ProgressEvent, ProgressSink};

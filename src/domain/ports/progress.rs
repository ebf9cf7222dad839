//! Progress port - streaming per-test feedback from the runner.

use crate::domain::models::{Category, TestStatus};

/// One step of runner progress, emitted as it happens rather than
/// batched at the end of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// A category pass is starting.
    CategoryStarted(Category),

    /// A planned executable was found, executed, and recorded.
    TestFinished {
        /// Category the result was recorded under.
        category: Category,
        /// Logical test name.
        name: String,
        /// Outcome classification.
        status: TestStatus,
    },

    /// A planned executable was absent from the build tree. No result
    /// is recorded for it.
    TestMissing {
        /// Category the entry was planned under.
        category: Category,
        /// Logical test name.
        name: String,
    },
}

/// Consumer of runner progress.
///
/// The CLI installs a printing sink; tests install a recording one.
pub trait ProgressSink: Send + Sync {
    /// Observe one progress event.
    fn on_event(&self, event: &ProgressEvent);
}

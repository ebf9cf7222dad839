//! Orchestrator configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::suite::{Category, SuiteEntry};

/// Main configuration structure for the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Build tree holding the compiled test and example executables.
    #[serde(default = "default_build_dir")]
    pub build_dir: PathBuf,

    /// Per-test wall-clock timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Report file name, resolved inside the build directory.
    #[serde(default = "default_report_filename")]
    pub report_filename: String,

    /// Ordered plan of executables to run.
    #[serde(default = "default_suite")]
    pub suite: Vec<SuiteEntry>,
}

fn default_build_dir() -> PathBuf {
    PathBuf::from("./build")
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_report_filename() -> String {
    "test_results.json".to_string()
}

/// The conventional plan: executables a standard build of the upstream
/// project produces.
fn default_suite() -> Vec<SuiteEntry> {
    [
        (Category::Unit, "test_types"),
        (Category::Unit, "test_task"),
        (Category::Unit, "test_task_builder"),
        (Category::Unit, "test_claimer"),
        (Category::Unit, "test_task_platform"),
        (Category::Unit, "test_thread_safety"),
        (Category::Unit, "test_web"),
        (Category::Integration, "integration_test_workflow"),
        (Category::Integration, "integration_test_web_api"),
        (Category::Example, "example_basic_usage"),
        (Category::Example, "example_multi_claimer"),
        (Category::Example, "example_web_monitoring"),
    ]
    .into_iter()
    .map(|(category, name)| SuiteEntry::new(category, name))
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            build_dir: default_build_dir(),
            timeout_secs: default_timeout_secs(),
            report_filename: default_report_filename(),
            suite: default_suite(),
        }
    }
}

impl Config {
    /// Per-test timeout as a `Duration`.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Path of the report file inside the build directory.
    #[must_use]
    pub fn report_path(&self) -> PathBuf {
        self.build_dir.join(&self.report_filename)
    }
}

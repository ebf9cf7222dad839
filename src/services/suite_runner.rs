//! Sequential execution of the suite plan.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::domain::models::{Category, RunReport, SuiteEntry};
use crate::domain::ports::{ProgressEvent, ProgressSink, TestExecutor};

/// Walks the plan one executable at a time and fills a result store.
///
/// Strictly sequential on purpose: the executables may share external
/// resources (ports, files), so each run completes before the next
/// starts.
pub struct SuiteRunner {
    build_dir: PathBuf,
    plan: Vec<SuiteEntry>,
    executor: Arc<dyn TestExecutor>,
    sink: Arc<dyn ProgressSink>,
}

impl SuiteRunner {
    /// Runner over `plan`, resolving executables under `build_dir`.
    pub fn new(
        build_dir: impl Into<PathBuf>,
        plan: Vec<SuiteEntry>,
        executor: Arc<dyn TestExecutor>,
        sink: Arc<dyn ProgressSink>,
    ) -> Self {
        Self {
            build_dir: build_dir.into(),
            plan,
            executor,
            sink,
        }
    }

    /// Execute every planned test and return the filled store.
    ///
    /// Categories run unit → integration → examples; entries keep their
    /// declared order within a category. A planned executable missing
    /// from the build tree is announced through the sink and leaves no
    /// entry in the store.
    pub async fn run(&self) -> RunReport {
        let mut report = RunReport::new();

        for category in Category::ALL {
            self.sink.on_event(&ProgressEvent::CategoryStarted(category));
            self.run_category(category, &mut report).await;
        }

        report
    }

    async fn run_category(&self, category: Category, report: &mut RunReport) {
        for entry in self.plan.iter().filter(|e| e.category == category) {
            let path = self.build_dir.join(category.subdir()).join(&entry.name);

            if !path.exists() {
                info!(test = %entry.name, category = %category, "executable not found, skipping");
                self.sink.on_event(&ProgressEvent::TestMissing {
                    category,
                    name: entry.name.clone(),
                });
                continue;
            }

            let result = self.executor.execute(&entry.name, &path).await;
            info!(
                test = %entry.name,
                category = %category,
                status = %result.status,
                return_code = result.return_code,
                "test finished"
            );
            self.sink.on_event(&ProgressEvent::TestFinished {
                category,
                name: entry.name.clone(),
                status: result.status,
            });
            report.record(category, result);
        }
    }
}

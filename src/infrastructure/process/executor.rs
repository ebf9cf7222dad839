//! Subprocess test executor.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::time::{timeout, Duration};
use tracing::{debug, warn};

use crate::domain::models::TestResult;
use crate::domain::ports::TestExecutor;

/// Runs each test as a child process with piped streams and a wall-clock
/// bound enforced around the wait itself.
#[derive(Debug, Clone, Copy)]
pub struct ProcessExecutor {
    timeout: Duration,
}

impl ProcessExecutor {
    /// Executor with the given per-test timeout.
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

/// Read a piped stream to EOF, tolerating an already-taken handle.
async fn drain<R: AsyncRead + Unpin>(pipe: Option<R>) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        pipe.read_to_end(&mut buf).await?;
    }
    Ok(buf)
}

#[async_trait]
impl TestExecutor for ProcessExecutor {
    async fn execute(&self, name: &str, path: &Path) -> TestResult {
        debug!(test = name, path = %path.display(), "spawning test executable");

        let mut child = match Command::new(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(err) => {
                warn!(test = name, error = %err, "failed to launch test executable");
                return TestResult::launch_error(name, err.to_string());
            }
        };

        let stdout_pipe = child.stdout.take();
        let stderr_pipe = child.stderr.take();

        // Drain both pipes concurrently before waiting: a child that
        // fills one pipe while we block on the other would deadlock.
        let result = timeout(self.timeout, async {
            let (stdout, stderr) = tokio::try_join!(drain(stdout_pipe), drain(stderr_pipe))?;
            let status = child.wait().await?;
            Ok::<_, std::io::Error>((status, stdout, stderr))
        })
        .await;

        match result {
            Ok(Ok((status, stdout, stderr))) => {
                // None means killed by a signal; fold into -1 like the
                // other abnormal endings.
                let return_code = status.code().unwrap_or(-1);
                debug!(test = name, return_code, "test executable exited");
                TestResult::completed(
                    name,
                    return_code,
                    String::from_utf8_lossy(&stdout).into_owned(),
                    String::from_utf8_lossy(&stderr).into_owned(),
                )
            }
            Ok(Err(err)) => {
                warn!(test = name, error = %err, "failed waiting on test executable");
                TestResult::launch_error(name, err.to_string())
            }
            Err(_) => {
                // Timeout elapsed; the wait future is dropped, so the
                // child must be killed and reaped here.
                let _ = child.kill().await;
                warn!(
                    test = name,
                    timeout_secs = self.timeout.as_secs(),
                    "test executable exceeded timeout, killed"
                );
                TestResult::timed_out(name, self.timeout.as_secs())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::TestStatus;
    use std::io::Write;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_script(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "#!/bin/sh").unwrap();
        writeln!(file, "{body}").unwrap();
        drop(file);
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[tokio::test]
    async fn test_zero_exit_is_passed_with_captured_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_script(&dir, "test_ok", "echo hello");
        let executor = ProcessExecutor::new(Duration::from_secs(5));

        let result = executor.execute("test_ok", &path).await;

        assert_eq!(result.status, TestStatus::Passed);
        assert_eq!(result.return_code, 0);
        assert_eq!(result.stdout, "hello\n");
        assert!(result.stderr.is_empty());
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_failed_with_captured_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_script(&dir, "test_bad", "echo oops >&2; exit 3");
        let executor = ProcessExecutor::new(Duration::from_secs(5));

        let result = executor.execute("test_bad", &path).await;

        assert_eq!(result.status, TestStatus::Failed);
        assert_eq!(result.return_code, 3);
        assert_eq!(result.stderr, "oops\n");
    }

    #[tokio::test]
    async fn test_overrunning_process_is_timeout() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_script(&dir, "test_slow", "sleep 30");
        let executor = ProcessExecutor::new(Duration::from_secs(1));

        let result = executor.execute("test_slow", &path).await;

        assert_eq!(result.status, TestStatus::Timeout);
        assert_eq!(result.return_code, -1);
        assert!(result.stdout.is_empty());
        assert_eq!(result.stderr, "Test timeout after 1 seconds");
    }

    #[tokio::test]
    async fn test_missing_executable_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_gone");
        let executor = ProcessExecutor::new(Duration::from_secs(5));

        let result = executor.execute("test_gone", &path).await;

        assert_eq!(result.status, TestStatus::Error);
        assert_eq!(result.return_code, -1);
        assert!(!result.stderr.is_empty());
    }

    #[tokio::test]
    async fn test_signal_killed_process_maps_to_minus_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_script(&dir, "test_sig", "kill -9 $$");
        let executor = ProcessExecutor::new(Duration::from_secs(5));

        let result = executor.execute("test_sig", &path).await;

        assert_eq!(result.status, TestStatus::Failed);
        assert_eq!(result.return_code, -1);
    }

    #[tokio::test]
    async fn test_large_interleaved_output_does_not_deadlock() {
        let dir = tempfile::tempdir().unwrap();
        // Well past a 64 KiB pipe buffer on both streams.
        let path = write_script(
            &dir,
            "test_chatty",
            "i=0; while [ $i -lt 2000 ]; do echo 0123456789012345678901234567890123456789; \
             echo 0123456789012345678901234567890123456789 >&2; i=$((i+1)); done",
        );
        let executor = ProcessExecutor::new(Duration::from_secs(10));

        let result = executor.execute("test_chatty", &path).await;

        assert_eq!(result.status, TestStatus::Passed);
        assert_eq!(result.stdout.lines().count(), 2000);
        assert_eq!(result.stderr.lines().count(), 2000);
    }
}

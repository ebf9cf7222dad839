//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across integration test
//! files: fabricated build trees with small shell scripts standing in
//! for compiled test executables.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Create a temporary directory for test isolation
///
/// Returns a TempDir that will be cleaned up when dropped.
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Create a build tree with empty tests/ and examples/ subdirectories.
pub fn temp_build_tree() -> TempDir {
    let dir = temp_dir();
    std::fs::create_dir_all(dir.path().join("tests")).expect("Failed to create tests dir");
    std::fs::create_dir_all(dir.path().join("examples")).expect("Failed to create examples dir");
    dir
}

/// Drop an executable shell script into the build tree.
///
/// `subdir` is "tests" or "examples"; `body` runs under /bin/sh.
pub fn add_executable(build_dir: &Path, subdir: &str, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = build_dir.join(subdir).join(name);
    let mut file = std::fs::File::create(&path).expect("Failed to create script");
    writeln!(file, "#!/bin/sh").expect("Failed to write shebang");
    writeln!(file, "{body}").expect("Failed to write body");
    drop(file);
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to set permissions");
    path
}

/// Write a config file into `dir` and return its path.
pub fn write_config(dir: &Path, yaml: &str) -> PathBuf {
    let path = dir.join("proctor.yaml");
    std::fs::write(&path, yaml).expect("Failed to write config");
    path
}

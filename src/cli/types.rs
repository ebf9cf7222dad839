//! CLI type definitions
//!
//! This module contains the clap structure that defines the CLI interface.

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments. One flat command: run the suite.
#[derive(Parser, Debug)]
#[command(name = "proctor")]
#[command(about = "Proctor - Test Suite Orchestrator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Build directory holding tests/ and examples/ (overrides config)
    pub build_dir: Option<PathBuf>,

    /// Load configuration from a specific file instead of proctor.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Exit nonzero when the overall verdict is FAILED
    #[arg(long)]
    pub strict: bool,
}

//! Infrastructure layer module
//!
//! This module contains the adapters that touch the operating system:
//! - Subprocess execution (tokio)
//! - Configuration management (figment)
//! - Report persistence (serde_json)
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod process;
pub mod report;

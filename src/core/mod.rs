//! Core building blocks shared by every version-relay command
//!
//! - **config**: relay.toml parsing, defaults and validation
//! - **context**: per-invocation context shared by all commands
//! - **error**: error taxonomy, exit codes and help messages
//! - **fs**: required-file reads and atomic writes
//! - **inputs**: orchestrator inputs read from the process environment

pub mod config;
pub mod context;
pub mod error;
pub mod fs;
pub mod inputs;

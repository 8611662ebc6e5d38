//! CLI commands for version-relay
//!
//! Each command is an independent pipeline step:
//!
//! - **read**: expose `version`, `changelog` and `current_date` as workflow outputs
//! - **append**: add the `version` input to the release history
//! - **generate**: write the version module compiled into the product
//! - **history**: print the recorded releases
//!
//! All commands accept `&RelayContext` so none of them touch the process
//! environment directly.

pub mod append;
pub mod generate;
pub mod history;
pub mod read;

pub use append::run_append;
pub use generate::run_generate;
pub use history::run_history;
pub use read::run_read;

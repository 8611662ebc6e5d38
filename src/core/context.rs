//! Invocation context - build once in main, pass to every command
//!
//! ```text
//! main.rs:
//!   RelayContext::build(cwd, ActionInputs::from_env()) -> &RelayContext
//!   |
//!   v
//! commands/read.rs, append.rs, generate.rs:
//!   fn run_*(ctx: &RelayContext, ...)
//! ```
//!
//! Commands never read the process environment or current directory on
//! their own, so tests can build a context over a temp directory with
//! hand-picked inputs.

use crate::core::config::RelayConfig;
use crate::core::error::RelayResult;
use crate::core::inputs::ActionInputs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct RelayContext {
  /// Directory all configured paths are resolved against
  pub root: PathBuf,

  /// relay.toml, or defaults when absent
  pub config: RelayConfig,

  /// Orchestrator inputs captured at the process boundary
  pub inputs: ActionInputs,
}

impl RelayContext {
  /// Load config from `root` and attach the given inputs
  pub fn build(root: &Path, inputs: ActionInputs) -> RelayResult<Self> {
    let config = RelayConfig::load(root)?;
    Ok(Self {
      root: root.to_path_buf(),
      config,
      inputs,
    })
  }

  /// Resolve a configured path against the workspace root
  pub fn resolve(&self, path: &Path) -> PathBuf {
    self.root.join(path)
  }

  pub fn version_file(&self) -> PathBuf {
    self.resolve(&self.config.paths.version_file)
  }

  pub fn changelog(&self) -> PathBuf {
    self.resolve(&self.config.paths.changelog)
  }

  pub fn history(&self) -> PathBuf {
    self.resolve(&self.config.paths.history)
  }
}

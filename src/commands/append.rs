//! `version-relay append`: record a released version in the history file

use crate::core::context::RelayContext;
use crate::core::error::RelayResult;
use crate::core::inputs::input_env_key;
use crate::release::{VersionHistory, VersionRecord};

/// Name of the action input carrying the version to append
pub const VERSION_INPUT: &str = "version";

/// What an append invocation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendOutcome {
  /// No version supplied; the history was not touched
  Skipped,
  /// The version was appended; `len` is the new history length
  Appended { version: String, len: usize },
}

/// Append the `version` input to the history, or do nothing when it is empty
pub fn append_version(ctx: &RelayContext, create: bool) -> RelayResult<AppendOutcome> {
  let Some(version) = ctx.inputs.get(VERSION_INPUT)? else {
    return Ok(AppendOutcome::Skipped);
  };

  let path = ctx.history();
  let mut history = if create {
    VersionHistory::load_or_default(&path)?
  } else {
    VersionHistory::load(&path)?
  };

  if history.contains(version) {
    tracing::warn!("{} is already recorded in {}; appending again", version, path.display());
  }

  history.push(VersionRecord::new(version));
  history.save(&path)?;

  tracing::info!(version, entries = history.len(), "appended to {}", path.display());

  Ok(AppendOutcome::Appended {
    version: version.to_string(),
    len: history.len(),
  })
}

/// Run the append command
pub fn run_append(ctx: &RelayContext, create: bool) -> RelayResult<()> {
  match append_version(ctx, create)? {
    AppendOutcome::Skipped => {
      println!(
        "⚪ {} is empty, history left unchanged",
        input_env_key(VERSION_INPUT)
      );
    }
    AppendOutcome::Appended { version, len } => {
      println!("✅ Recorded {} ({} release(s) in history)", version, len);
    }
  }
  Ok(())
}

//! `version-relay history`: show the recorded releases

use crate::core::context::RelayContext;
use crate::core::error::RelayResult;
use crate::release::VersionHistory;

/// Run the history command
pub fn run_history(ctx: &RelayContext, json: bool) -> RelayResult<()> {
  let path = ctx.history();
  let history = VersionHistory::load(&path)?;

  if json {
    println!("{}", history.to_json()?);
    return Ok(());
  }

  if history.is_empty() {
    println!("⚠️  No releases recorded in {}", ctx.config.paths.history.display());
    return Ok(());
  }

  println!("📋 Release history ({} release(s))", history.len());
  println!();
  for line in history_lines(&history) {
    println!("{}", line);
  }

  Ok(())
}

/// One line per release, oldest first, newest marked
fn history_lines(history: &VersionHistory) -> Vec<String> {
  let last = history.len().saturating_sub(1);
  history
    .records()
    .iter()
    .enumerate()
    .map(|(i, record)| {
      let marker = if i == last { "  (latest)" } else { "" };
      format!("  {:>3}. {}{}", i + 1, record.version, marker)
    })
    .collect()
}

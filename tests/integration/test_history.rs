//! Integration tests for `version-relay history`

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_history_text() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_file("versions.json", r#"[{"version":"1.0.0"},{"version":"1.1.0"}]"#)?;

  let output = run_relay(&ws.path, &["history"], &[])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("1. 1.0.0"));
  assert!(stdout.contains("2. 1.1.0  (latest)"));
  Ok(())
}

#[test]
fn test_history_json() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_file("versions.json", r#"[{"version":"1.0.0"}]"#)?;

  let output = run_relay(&ws.path, &["history", "--json"], &[])?;
  let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;

  assert_eq!(json, serde_json::json!([{"version": "1.0.0"}]));
  Ok(())
}

#[test]
fn test_history_empty() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_file("versions.json", "[]")?;

  let output = run_relay(&ws.path, &["history"], &[])?;
  assert!(String::from_utf8_lossy(&output.stdout).contains("No releases recorded"));
  Ok(())
}

#[test]
fn test_history_missing_file() -> Result<()> {
  let ws = TestWorkspace::new()?;

  let output = run_relay_failing(&ws.path, &["history"], &[])?;
  assert!(String::from_utf8_lossy(&output.stderr).contains("versions.json"));
  Ok(())
}

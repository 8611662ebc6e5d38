//! Integration tests for `version-relay append`

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_append_from_action_input() -> Result<()> {
  let ws = TestWorkspace::with_release("2.0.0", "Fixed bug.\n")?;

  run_relay(&ws.path, &["append"], &[("INPUT_VERSION", "2.0.0")])?;

  assert_eq!(ws.read_file("versions.json")?, "[\n  {\n    \"version\": \"2.0.0\"\n  }\n]");
  Ok(())
}

#[test]
fn test_append_positional_overrides_input() -> Result<()> {
  let ws = TestWorkspace::with_release("2.0.0", "")?;

  run_relay(&ws.path, &["append", "2.1.0"], &[("INPUT_VERSION", "2.0.0")])?;

  let history: serde_json::Value = serde_json::from_str(&ws.read_file("versions.json")?)?;
  assert_eq!(history, serde_json::json!([{"version": "2.1.0"}]));
  Ok(())
}

#[test]
fn test_append_without_input_is_noop() -> Result<()> {
  let ws = TestWorkspace::with_release("2.0.0", "")?;
  ws.write_file("versions.json", "[{\"version\":\"1.0.0\"}]")?;

  let output = run_relay(&ws.path, &["append"], &[("INPUT_VERSION", "")])?;
  assert_eq!(output.status.code(), Some(0));
  assert!(String::from_utf8_lossy(&output.stdout).contains("INPUT_VERSION is empty"));
  assert_eq!(ws.read_file("versions.json")?, "[{\"version\":\"1.0.0\"}]");

  run_relay(&ws.path, &["append"], &[])?;
  assert_eq!(ws.read_file("versions.json")?, "[{\"version\":\"1.0.0\"}]");

  Ok(())
}

#[cfg(unix)]
#[test]
fn test_append_rejects_non_utf8_input() -> Result<()> {
  use std::ffi::OsStr;
  use std::os::unix::ffi::OsStrExt;

  let ws = TestWorkspace::with_release("2.0.0", "")?;

  let output = relay_command(&ws.path, &["append"], &[])
    .env("INPUT_VERSION", OsStr::from_bytes(b"2.0.0-\xff"))
    .output()?;

  assert_eq!(output.status.code(), Some(1));
  assert!(!String::from_utf8_lossy(&output.stdout).contains("is empty"));
  assert!(String::from_utf8_lossy(&output.stderr).contains("INPUT_VERSION is not valid UTF-8"));
  assert_eq!(ws.read_file("versions.json")?, "[]");

  Ok(())
}

#[test]
fn test_repeated_appends_grow_history_in_order() -> Result<()> {
  let ws = TestWorkspace::with_release("1.0.0", "")?;

  for version in ["1.0.0", "1.1.0", "2.0.0"] {
    run_relay(&ws.path, &["append"], &[("INPUT_VERSION", version)])?;
  }

  let history: serde_json::Value = serde_json::from_str(&ws.read_file("versions.json")?)?;
  assert_eq!(
    history,
    serde_json::json!([{"version": "1.0.0"}, {"version": "1.1.0"}, {"version": "2.0.0"}])
  );
  Ok(())
}

#[test]
fn test_append_preserves_extra_fields() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_file(
    "versions.json",
    r#"[{"version":"1.0.0","released":"01-02-2024","notes":{"highlights":["fast"]}}]"#,
  )?;

  run_relay(&ws.path, &["append", "1.1.0"], &[])?;

  let history: serde_json::Value = serde_json::from_str(&ws.read_file("versions.json")?)?;
  assert_eq!(
    history[0],
    serde_json::json!({"version": "1.0.0", "released": "01-02-2024", "notes": {"highlights": ["fast"]}})
  );
  assert_eq!(history[1], serde_json::json!({"version": "1.1.0"}));
  Ok(())
}

#[test]
fn test_append_missing_history_fails() -> Result<()> {
  let ws = TestWorkspace::new()?;

  let output = run_relay_failing(&ws.path, &["append"], &[("INPUT_VERSION", "1.0.0")])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(!ws.file_exists("versions.json"));

  run_relay(&ws.path, &["append", "--create"], &[("INPUT_VERSION", "1.0.0")])?;
  assert!(ws.file_exists("versions.json"));

  Ok(())
}

#[test]
fn test_append_malformed_history_fails_untouched() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_file("versions.json", "{\"version\": \"1.0.0\"}")?;

  let output = run_relay_failing(&ws.path, &["append", "1.1.0"], &[])?;
  assert!(String::from_utf8_lossy(&output.stderr).contains("JSON array"));
  assert_eq!(ws.read_file("versions.json")?, "{\"version\": \"1.0.0\"}");

  Ok(())
}

#[test]
fn test_append_uses_configured_history_path() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_file("relay.toml", "[paths]\nhistory = \"release/history.json\"\n")?;
  ws.write_file("release/history.json", "[]")?;

  run_relay(&ws.path, &["append", "0.9.0"], &[])?;

  assert!(ws.read_file("release/history.json")?.contains("0.9.0"));
  assert!(!ws.file_exists("versions.json"));
  Ok(())
}

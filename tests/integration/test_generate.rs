//! Integration tests for `version-relay generate`

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_generate_go_module() -> Result<()> {
  let ws = TestWorkspace::with_release("2.0.0", "Fixed bug.\n")?;
  ws.create_dir("version")?;

  run_relay(&ws.path, &["generate"], &[])?;

  assert_eq!(
    ws.read_file("version/version.go")?,
    "package version\nvar Version = \"2.0.0\"\nvar Changelog = \"Fixed bug.\\n\"\n"
  );
  Ok(())
}

#[test]
fn test_generated_changelog_decodes_exactly() -> Result<()> {
  let changelog = "## 2.0.0\r\n\n* \"Quoted\" and \\ backslashes\n* tab\tand bell \u{7}\n* emoji 🚀\n";
  let ws = TestWorkspace::with_release("2.0.0", changelog)?;
  ws.create_dir("version")?;

  run_relay(&ws.path, &["generate"], &[])?;

  let source = ws.read_file("version/version.go")?;
  let literal = source
    .lines()
    .find_map(|line| line.strip_prefix("var Changelog = "))
    .expect("Changelog constant");
  let decoded: String = serde_json::from_str(literal)?;
  assert_eq!(decoded, changelog);

  Ok(())
}

#[test]
fn test_generate_missing_output_dir_fails() -> Result<()> {
  let ws = TestWorkspace::with_release("2.0.0", "Fixed bug.\n")?;

  let output = run_relay_failing(&ws.path, &["generate"], &[])?;
  assert_eq!(output.status.code(), Some(2));
  assert!(String::from_utf8_lossy(&output.stderr).contains("mkdir -p"));
  assert!(!ws.file_exists("version"));

  Ok(())
}

#[test]
fn test_generate_fails_without_version_field() -> Result<()> {
  let ws = TestWorkspace::with_release("2.0.0", "Fixed bug.\n")?;
  ws.write_file("version.json", "{}")?;
  ws.create_dir("version")?;

  run_relay_failing(&ws.path, &["generate"], &[])?;
  assert!(!ws.file_exists("version/version.go"));

  Ok(())
}

#[test]
fn test_generate_rust_module_from_config() -> Result<()> {
  let ws = TestWorkspace::with_release("0.3.0", "Initial release\n")?;
  ws.write_file(
    "relay.toml",
    "[generate]\ntarget = \"rust\"\noutput_dir = \"src\"\nmodule = \"build_version\"\n",
  )?;
  ws.create_dir("src")?;

  run_relay(&ws.path, &["generate"], &[])?;

  assert_eq!(
    ws.read_file("src/build_version.rs")?,
    "pub const VERSION: &str = \"0.3.0\";\npub const CHANGELOG: &str = \"Initial release\\n\";\n"
  );
  Ok(())
}

#[test]
fn test_generate_stdout() -> Result<()> {
  let ws = TestWorkspace::with_release("2.0.0", "x")?;

  let output = run_relay(&ws.path, &["generate", "--stdout"], &[])?;
  assert_eq!(
    String::from_utf8_lossy(&output.stdout),
    "package version\nvar Version = \"2.0.0\"\nvar Changelog = \"x\"\n"
  );
  assert!(!ws.file_exists("version"));

  Ok(())
}

#[test]
fn test_generate_rejects_invalid_config() -> Result<()> {
  let ws = TestWorkspace::with_release("2.0.0", "x")?;
  ws.write_file("relay.toml", "[generate]\nmodule = \"../escape\"\n")?;

  let output = run_relay_failing(&ws.path, &["generate"], &[])?;
  assert!(String::from_utf8_lossy(&output.stderr).contains("generate.module"));

  Ok(())
}

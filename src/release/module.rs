//! Source module embedding the version and changelog as constants

use crate::core::config::ModuleTarget;
use crate::core::error::RelayResult;
use crate::release::changelog::ChangelogDocument;
use crate::release::descriptor::VersionDescriptor;

/// A rendered version module, regenerated in full on every run
#[derive(Debug, Clone)]
pub struct GeneratedVersionModule<'a> {
  pub target: ModuleTarget,
  pub package: &'a str,
  pub version: &'a str,
  pub changelog: &'a str,
}

impl<'a> GeneratedVersionModule<'a> {
  pub fn new(
    target: ModuleTarget,
    package: &'a str,
    descriptor: &'a VersionDescriptor,
    changelog: &'a ChangelogDocument,
  ) -> Self {
    Self {
      target,
      package,
      version: &descriptor.version,
      changelog: changelog.as_str(),
    }
  }

  pub fn render(&self) -> RelayResult<String> {
    match self.target {
      ModuleTarget::Go => Ok(format!(
        "package {}\nvar Version = {}\nvar Changelog = {}\n",
        self.package,
        go_string_literal(self.version)?,
        go_string_literal(self.changelog)?
      )),
      ModuleTarget::Rust => Ok(format!(
        "pub const VERSION: &str = {};\npub const CHANGELOG: &str = {};\n",
        rust_string_literal(self.version),
        rust_string_literal(self.changelog)
      )),
    }
  }
}

/// Quote `s` as a Go interpreted string literal
///
/// JSON string escapes (`\"`, `\\`, `\n`, `\t`, `\b`, `\f`, `\r`, `\u00XX`)
/// are all valid Go escapes with the same meaning.
pub fn go_string_literal(s: &str) -> RelayResult<String> {
  Ok(serde_json::to_string(s)?)
}

/// Quote `s` as a Rust string literal
pub fn rust_string_literal(s: &str) -> String {
  format!("{:?}", s)
}

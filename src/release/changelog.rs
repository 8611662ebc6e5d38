//! Release notes text (`CHANGELOG.md`), carried as an opaque blob

use crate::core::error::RelayResult;
use crate::core::fs::read_required_text;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogDocument {
  text: String,
}

impl ChangelogDocument {
  #[cfg(test)]
  pub fn new(text: impl Into<String>) -> Self {
    Self { text: text.into() }
  }

  /// Read the changelog verbatim; it must be UTF-8 but is otherwise never inspected
  pub fn load(path: &Path) -> RelayResult<Self> {
    let text = read_required_text(path)?;
    tracing::debug!("read {} bytes of changelog from {}", text.len(), path.display());
    Ok(Self { text })
  }

  pub fn as_str(&self) -> &str {
    &self.text
  }
}

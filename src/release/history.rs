//! Append-only log of released versions (`versions.json`)
//!
//! Entries are only ever pushed onto the end. Any fields an existing record
//! carries beyond `version` are kept in place so a rewrite never mutates
//! earlier releases.

use crate::core::error::{RelayError, RelayResult};
use crate::core::fs::{read_required, write_atomic};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One released version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
  pub version: String,
  #[serde(flatten)]
  pub extra: serde_json::Map<String, serde_json::Value>,
}

impl VersionRecord {
  pub fn new(version: impl Into<String>) -> Self {
    Self {
      version: version.into(),
      extra: serde_json::Map::new(),
    }
  }
}

/// Ordered release history, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionHistory {
  records: Vec<VersionRecord>,
}

impl VersionHistory {
  /// Decode a history array, rejecting non-arrays and records without a string `version`
  pub fn parse(path: &Path, bytes: &[u8]) -> RelayResult<Self> {
    serde_json::from_slice(bytes).map_err(|e| RelayError::malformed(path, e))
  }

  pub fn load(path: &Path) -> RelayResult<Self> {
    let bytes = read_required(path)?;
    Self::parse(path, &bytes)
  }

  /// Load the history, or start an empty one when the file does not exist
  pub fn load_or_default(path: &Path) -> RelayResult<Self> {
    match Self::load(path) {
      Err(RelayError::MissingFile { .. }) => {
        tracing::info!("{} does not exist, starting a new history", path.display());
        Ok(Self::default())
      }
      other => other,
    }
  }

  pub fn records(&self) -> &[VersionRecord] {
    &self.records
  }

  pub fn len(&self) -> usize {
    self.records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }

  pub fn contains(&self, version: &str) -> bool {
    self.records.iter().any(|r| r.version == version)
  }

  pub fn push(&mut self, record: VersionRecord) {
    self.records.push(record);
  }

  /// Two-space indented JSON, `[]` when empty, no trailing newline
  pub fn to_json(&self) -> RelayResult<String> {
    Ok(serde_json::to_string_pretty(&self.records)?)
  }

  /// Replace the history file with the current contents
  pub fn save(&self, path: &Path) -> RelayResult<()> {
    write_atomic(path, self.to_json()?.as_bytes())
  }
}

//! The current version record (`version.json`)

use crate::core::error::{RelayError, RelayResult};
use crate::core::fs::read_required;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Single source of truth for the version being released
///
/// ```json
/// {"version": "1.4.0"}
/// ```
///
/// The value is carried through exactly as written; it is never normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionDescriptor {
  pub version: String,
}

impl VersionDescriptor {
  /// Decode a descriptor, rejecting anything that is not an object with a string `version`
  pub fn parse(path: &Path, bytes: &[u8]) -> RelayResult<Self> {
    let descriptor: VersionDescriptor = serde_json::from_slice(bytes).map_err(|e| RelayError::malformed(path, e))?;

    if descriptor.version.is_empty() {
      tracing::warn!("{} has an empty version", path.display());
    } else if semver::Version::parse(&descriptor.version).is_err() {
      tracing::warn!(
        "version '{}' in {} is not valid semver; passing it through unchanged",
        descriptor.version,
        path.display()
      );
    }

    Ok(descriptor)
  }

  /// Load the descriptor from disk
  pub fn load(path: &Path) -> RelayResult<Self> {
    let bytes = read_required(path)?;
    Self::parse(path, &bytes)
  }
}

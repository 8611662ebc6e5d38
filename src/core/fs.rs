//! File access shared by all commands
//!
//! Reads map `NotFound` to `MissingFile`; writes go through a temp file in
//! the destination directory and are renamed into place, so a crash never
//! leaves a half-written history or module behind.

use crate::core::error::{RelayError, RelayResult, ResultExt};
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Read a required input file as raw bytes
pub fn read_required(path: &Path) -> RelayResult<Vec<u8>> {
  match std::fs::read(path) {
    Err(e) if e.kind() == io::ErrorKind::NotFound => Err(RelayError::missing_file(path)),
    result => result.context(format!("Failed to read {}", path.display())),
  }
}

/// Read a required input file that must be UTF-8 text
pub fn read_required_text(path: &Path) -> RelayResult<String> {
  let bytes = read_required(path)?;
  String::from_utf8(bytes).map_err(|e| RelayError::malformed(path, format!("not valid UTF-8 ({})", e.utf8_error())))
}

/// Replace `path` with `contents` via temp file + rename
///
/// The parent directory must already exist.
pub fn write_atomic(path: &Path, contents: &[u8]) -> RelayResult<()> {
  let dir = match path.parent() {
    Some(p) if !p.as_os_str().is_empty() => p,
    _ => Path::new("."),
  };

  let mut tmp = NamedTempFile::new_in(dir).map_err(|e| RelayError::write_failure(path, e))?;
  tmp.write_all(contents).map_err(|e| RelayError::write_failure(path, e))?;
  tmp.as_file().sync_all().map_err(|e| RelayError::write_failure(path, e))?;

  // Temp files are created 0600; keep the target's mode (or a normal file mode)
  let permissions = std::fs::metadata(path).ok().map(|m| m.permissions()).or_else(default_permissions);
  if let Some(permissions) = permissions {
    tmp
      .as_file()
      .set_permissions(permissions)
      .map_err(|e| RelayError::write_failure(path, e))?;
  }

  tmp.persist(path).map_err(|e| RelayError::write_failure(path, e.error))?;

  tracing::debug!("wrote {} bytes to {}", contents.len(), path.display());
  Ok(())
}

#[cfg(unix)]
fn default_permissions() -> Option<std::fs::Permissions> {
  use std::os::unix::fs::PermissionsExt;
  Some(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<std::fs::Permissions> {
  None
}

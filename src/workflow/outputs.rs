//! Named outputs handed back to the workflow runner
//!
//! Two channels exist. Runners that set `GITHUB_OUTPUT` read heredoc blocks
//! from that file; older runners parse `::set-output` workflow commands from
//! stdout. Both are line-oriented, so multi-line values are either fenced by
//! a delimiter or percent-escaped.

use crate::core::error::{RelayError, RelayResult};
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Destination for workflow outputs
pub trait OutputSink {
  /// Emit one `name = value` pair
  fn set_output(&mut self, name: &str, value: &str) -> RelayResult<()>;
}

/// `::set-output name=<name>::<value>` lines on a writer (normally stdout)
pub struct CommandSink<W: Write> {
  writer: W,
}

impl<W: Write> CommandSink<W> {
  pub fn new(writer: W) -> Self {
    Self { writer }
  }

  #[cfg(test)]
  pub fn into_inner(self) -> W {
    self.writer
  }
}

impl<W: Write> OutputSink for CommandSink<W> {
  fn set_output(&mut self, name: &str, value: &str) -> RelayResult<()> {
    writeln!(
      self.writer,
      "::set-output name={}::{}",
      escape_property(name),
      escape_data(value)
    )?;
    self.writer.flush()?;
    Ok(())
  }
}

/// Heredoc blocks appended to the runner's output file
pub struct FileSink {
  path: PathBuf,
}

impl FileSink {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  #[cfg(test)]
  pub fn path(&self) -> &std::path::Path {
    &self.path
  }
}

impl OutputSink for FileSink {
  fn set_output(&mut self, name: &str, value: &str) -> RelayResult<()> {
    let block = heredoc_block(name, value)?;

    let mut file = OpenOptions::new()
      .create(true)
      .append(true)
      .open(&self.path)
      .map_err(|e| RelayError::write_failure(&self.path, e))?;
    file
      .write_all(block.as_bytes())
      .map_err(|e| RelayError::write_failure(&self.path, e))?;

    Ok(())
  }
}

/// Percent-escape a value for a workflow command
pub fn escape_data(value: &str) -> String {
  value.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

/// Percent-escape a workflow command property (the output name)
pub fn escape_property(value: &str) -> String {
  escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// Delimiter that fences `value` in the output file
///
/// Derived from the content so repeated runs produce identical files.
pub fn heredoc_delimiter(name: &str, value: &str) -> String {
  let mut hasher = Sha256::new();
  hasher.update(name.as_bytes());
  hasher.update([0u8]);
  hasher.update(value.as_bytes());
  let digest = hasher.finalize();

  let hex: String = digest[..8].iter().map(|b| format!("{:02x}", b)).collect();
  format!("ghadelimiter_{}", hex)
}

/// `name<<DELIM\nvalue\nDELIM\n`
pub fn heredoc_block(name: &str, value: &str) -> RelayResult<String> {
  let delimiter = heredoc_delimiter(name, value);

  if name.contains(&delimiter) || value.contains(&delimiter) {
    return Err(RelayError::with_help(
      format!("Output '{}' contains its own delimiter {}", name, delimiter),
      "Unset GITHUB_OUTPUT to fall back to ::set-output workflow commands.",
    ));
  }

  Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

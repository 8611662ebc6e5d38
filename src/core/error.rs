//! Error types for version-relay with contextual messages and exit codes
//!
//! Every failure aborts the invocation. The orchestrator only sees the exit
//! code and the diagnostic printed to stderr, so each variant carries enough
//! context (the offending path, the parse failure) to be actionable from a
//! CI log.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Exit codes for version-relay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (missing or malformed inputs, bad config)
  User = 1,
  /// System error (unwritable destination, I/O)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for version-relay
#[derive(Debug)]
pub enum RelayError {
  /// A required input file does not exist
  MissingFile { path: PathBuf },

  /// An input file exists but does not have the expected shape
  MalformedInput { path: PathBuf, reason: String },

  /// A destination could not be written
  WriteFailure { path: PathBuf, reason: String },

  /// Configuration errors
  Config(ConfigError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl RelayError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    RelayError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    RelayError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  pub fn missing_file(path: impl AsRef<Path>) -> Self {
    RelayError::MissingFile {
      path: path.as_ref().to_path_buf(),
    }
  }

  pub fn malformed(path: impl AsRef<Path>, reason: impl fmt::Display) -> Self {
    RelayError::MalformedInput {
      path: path.as_ref().to_path_buf(),
      reason: reason.to_string(),
    }
  }

  pub fn write_failure(path: impl AsRef<Path>, reason: impl fmt::Display) -> Self {
    RelayError::WriteFailure {
      path: path.as_ref().to_path_buf(),
      reason: reason.to_string(),
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      RelayError::Message { message, context, help } => RelayError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      RelayError::Io(err) => RelayError::Message {
        message: format!("I/O error: {}", err),
        context: Some(ctx_str),
        help: None,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      RelayError::MissingFile { .. } => ExitCode::User,
      RelayError::MalformedInput { .. } => ExitCode::User,
      RelayError::WriteFailure { .. } => ExitCode::System,
      RelayError::Config(_) => ExitCode::User,
      RelayError::Io(_) => ExitCode::System,
      RelayError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      RelayError::MissingFile { path } => Some(format!(
        "Run version-relay from the repository root, or check that {} is committed.",
        path.display()
      )),
      RelayError::MalformedInput { path, .. } => {
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        match name.as_str() {
          "version.json" => Some("Expected a JSON object such as {\"version\": \"1.4.0\"}.".to_string()),
          "versions.json" => Some("Expected a JSON array such as [{\"version\": \"1.4.0\"}].".to_string()),
          _ => None,
        }
      }
      RelayError::WriteFailure { path, .. } => path
        .parent()
        .filter(|p| !p.as_os_str().is_empty() && !p.exists())
        .map(|dir| format!("Create the output directory first: mkdir -p {}", dir.display())),
      RelayError::Config(e) => e.help_message(),
      RelayError::Message { help, .. } => help.clone(),
      RelayError::Io(_) => None,
    }
  }
}

impl fmt::Display for RelayError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RelayError::MissingFile { path } => write!(f, "Required file not found: {}", path.display()),
      RelayError::MalformedInput { path, reason } => {
        write!(f, "Malformed input in {}: {}", path.display(), reason)
      }
      RelayError::WriteFailure { path, reason } => {
        write!(f, "Failed to write {}: {}", path.display(), reason)
      }
      RelayError::Config(e) => write!(f, "{}", e),
      RelayError::Io(e) => write!(f, "I/O error: {}", e),
      RelayError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for RelayError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      RelayError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for RelayError {
  fn from(err: io::Error) -> Self {
    RelayError::Io(err)
  }
}

impl From<String> for RelayError {
  fn from(msg: String) -> Self {
    RelayError::message(msg)
  }
}

impl From<&str> for RelayError {
  fn from(msg: &str) -> Self {
    RelayError::message(msg)
  }
}

impl From<serde_json::Error> for RelayError {
  fn from(err: serde_json::Error) -> Self {
    RelayError::message(format!("JSON error: {}", err))
  }
}

impl From<toml_edit::de::Error> for RelayError {
  fn from(err: toml_edit::de::Error) -> Self {
    RelayError::Config(ConfigError::Invalid {
      reason: err.to_string(),
    })
  }
}

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
  /// Config file failed to parse or deserialize
  Invalid { reason: String },

  /// A field holds a value outside its allowed set
  InvalidValue { field: String, value: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::Invalid { .. } => {
        Some("Check relay.toml syntax, or delete it to fall back to the defaults.".to_string())
      }
      ConfigError::InvalidValue { field, .. } => match field.as_str() {
        "generate.module" => Some("Use a plain file stem such as \"version\" (no path separators).".to_string()),
        "generate.package" => Some("Use a Go identifier such as \"version\".".to_string()),
        _ => None,
      },
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::Invalid { reason } => write!(f, "Invalid relay configuration: {}", reason),
      ConfigError::InvalidValue { field, value } => {
        write!(f, "Invalid value '{}' for config field {}", value, field)
      }
    }
  }
}

/// Result type alias for version-relay
pub type RelayResult<T> = Result<T, RelayError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> RelayResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> RelayResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<RelayError>,
{
  fn context(self, ctx: impl Into<String>) -> RelayResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> RelayResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &RelayError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}

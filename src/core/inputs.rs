//! Process-boundary adapter for orchestrator-provided inputs
//!
//! The workflow runner hands action inputs to the process as environment
//! variables (`INPUT_<NAME>`) and names the output file in `GITHUB_OUTPUT`.
//! This is the only place the environment is consulted; commands receive an
//! `ActionInputs` value and never touch `std::env` themselves.

use crate::core::error::{RelayError, RelayResult};
use std::collections::{HashMap, HashSet};
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable naming the orchestrator's output file
pub const OUTPUT_FILE_VAR: &str = "GITHUB_OUTPUT";

/// Inputs supplied by the orchestrator for a single invocation
#[derive(Debug, Clone, Default)]
pub struct ActionInputs {
  values: HashMap<String, String>,
  /// Inputs that were set but are not valid UTF-8
  undecodable: HashSet<String>,
  /// File that receives `name<<DELIM` output blocks, when the runner provides one
  pub output_file: Option<PathBuf>,
}

/// Environment key for an action input: spaces become underscores, uppercased, `INPUT_` prefix
pub fn input_env_key(name: &str) -> String {
  format!("INPUT_{}", normalize_name(name))
}

fn normalize_name(name: &str) -> String {
  name.replace(' ', "_").to_uppercase()
}

impl ActionInputs {
  /// Snapshot the inputs from an iterator of environment pairs
  pub fn from_vars<I, K, V>(vars: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<OsString>,
    V: Into<OsString>,
  {
    let mut inputs = Self::default();

    for (key, value) in vars {
      // Non-UTF-8 keys can never name an input
      let Ok(key) = key.into().into_string() else {
        continue;
      };
      let value = value.into();

      if key == OUTPUT_FILE_VAR {
        if !value.is_empty() {
          inputs.output_file = Some(PathBuf::from(value));
        }
      } else if let Some(name) = key.strip_prefix("INPUT_") {
        match value.into_string() {
          Ok(value) => {
            inputs.values.insert(name.to_string(), value);
          }
          Err(_) => {
            inputs.undecodable.insert(name.to_string());
          }
        }
      }
    }

    inputs
  }

  /// Snapshot the inputs from the current process environment
  pub fn from_env() -> Self {
    // std::env::vars panics on non-UTF-8 entries
    Self::from_vars(std::env::vars_os())
  }

  /// Look up an input by its declared name; empty and unset are both `None`
  ///
  /// An input that is set but not valid UTF-8 is an error, never `None`.
  pub fn get(&self, name: &str) -> RelayResult<Option<&str>> {
    let key = normalize_name(name);
    if self.undecodable.contains(&key) {
      return Err(RelayError::with_help(
        format!("Action input {} is not valid UTF-8", input_env_key(name)),
        "Pass the value as plain text, or give it on the command line instead.",
      ));
    }

    Ok(self.values.get(&key).map(String::as_str).filter(|v| !v.is_empty()))
  }

  /// Override an input, as a command-line argument does
  pub fn with_input(mut self, name: &str, value: impl Into<String>) -> Self {
    let key = normalize_name(name);
    self.undecodable.remove(&key);
    self.values.insert(key, value.into());
    self
  }
}

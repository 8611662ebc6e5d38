use crate::core::error::{ConfigError, RelayError, RelayResult, ResultExt};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for version-relay
/// Searched in order: relay.toml, .relay.toml, .github/relay.toml
///
/// Every section is optional; a workspace without any config file gets the
/// conventional layout (version.json, CHANGELOG.md, versions.json, version/).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelayConfig {
  #[serde(default)]
  pub paths: PathsConfig,
  #[serde(default)]
  pub read: ReadConfig,
  #[serde(default)]
  pub generate: GenerateConfig,
}

/// Input and history file locations, relative to the workspace root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
  #[serde(default = "default_version_file")]
  pub version_file: PathBuf,
  #[serde(default = "default_changelog")]
  pub changelog: PathBuf,
  #[serde(default = "default_history")]
  pub history: PathBuf,
}

fn default_version_file() -> PathBuf {
  PathBuf::from("version.json")
}

fn default_changelog() -> PathBuf {
  PathBuf::from("CHANGELOG.md")
}

fn default_history() -> PathBuf {
  PathBuf::from("versions.json")
}

impl Default for PathsConfig {
  fn default() -> Self {
    Self {
      version_file: default_version_file(),
      changelog: default_changelog(),
      history: default_history(),
    }
  }
}

/// Settings for the `read` command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadConfig {
  #[serde(default)]
  pub date_format: DateFormat,
}

/// How `current_date` is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
  /// MM-DD-YYYY, zero-padded (`03-07-2024`, never `3-7-2024`)
  #[default]
  Us,
  /// YYYY-MM-DD
  Iso,
}

impl DateFormat {
  /// chrono format string for this style
  pub fn pattern(self) -> &'static str {
    match self {
      DateFormat::Us => "%m-%d-%Y",
      DateFormat::Iso => "%Y-%m-%d",
    }
  }
}

/// Settings for the `generate` command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
  #[serde(default)]
  pub target: ModuleTarget,
  #[serde(default = "default_output_dir")]
  pub output_dir: PathBuf,
  /// File stem of the generated module
  #[serde(default = "default_module")]
  pub module: String,
  /// Package clause for targets that have one
  #[serde(default = "default_package")]
  pub package: String,
}

fn default_output_dir() -> PathBuf {
  PathBuf::from("version")
}

fn default_module() -> String {
  "version".to_string()
}

fn default_package() -> String {
  "version".to_string()
}

impl Default for GenerateConfig {
  fn default() -> Self {
    Self {
      target: ModuleTarget::default(),
      output_dir: default_output_dir(),
      module: default_module(),
      package: default_package(),
    }
  }
}

/// Source language of the generated version module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModuleTarget {
  #[default]
  Go,
  Rust,
}

impl ModuleTarget {
  pub fn extension(self) -> &'static str {
    match self {
      ModuleTarget::Go => "go",
      ModuleTarget::Rust => "rs",
    }
  }
}

impl fmt::Display for ModuleTarget {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ModuleTarget::Go => write!(f, "go"),
      ModuleTarget::Rust => write!(f, "rust"),
    }
  }
}

impl GenerateConfig {
  /// Path of the generated module, relative to the workspace root
  pub fn output_path(&self) -> PathBuf {
    self
      .output_dir
      .join(format!("{}.{}", self.module, self.target.extension()))
  }

  /// Validate generate configuration
  pub fn validate(&self) -> RelayResult<()> {
    if self.module.is_empty() || self.module.contains(['/', '\\']) || self.module.starts_with('.') {
      return Err(RelayError::Config(ConfigError::InvalidValue {
        field: "generate.module".to_string(),
        value: self.module.clone(),
      }));
    }

    if !is_identifier(&self.package) {
      return Err(RelayError::Config(ConfigError::InvalidValue {
        field: "generate.package".to_string(),
        value: self.package.clone(),
      }));
    }

    Ok(())
  }
}

fn is_identifier(s: &str) -> bool {
  let mut chars = s.chars();
  match chars.next() {
    Some(c) if c.is_ascii_alphabetic() || c == '_' => chars.all(|c| c.is_ascii_alphanumeric() || c == '_'),
    _ => false,
  }
}

impl RelayConfig {
  /// Find config file in search order: relay.toml, .relay.toml, .github/relay.toml
  pub fn find_config_path(path: &Path) -> Option<PathBuf> {
    let candidates = vec![
      path.join("relay.toml"),
      path.join(".relay.toml"),
      path.join(".github").join("relay.toml"),
    ];

    candidates.into_iter().find(|p| p.exists())
  }

  /// Load config from the workspace, or the defaults when no file exists
  pub fn load(path: &Path) -> RelayResult<Self> {
    let Some(config_path) = Self::find_config_path(path) else {
      tracing::debug!("no relay.toml found under {}, using defaults", path.display());
      return Ok(Self::default());
    };

    tracing::debug!("loading config from {}", config_path.display());
    let content = fs::read_to_string(&config_path)
      .with_context(|| format!("Failed to read config from {}", config_path.display()))?;
    let config: RelayConfig = toml_edit::de::from_str(&content)?;

    config.generate.validate()?;

    Ok(config)
  }
}

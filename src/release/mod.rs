//! Release artifacts that version-relay moves between pipeline stages
//!
//! - **descriptor**: `version.json`, the current version
//! - **changelog**: `CHANGELOG.md`, opaque release notes
//! - **history**: `versions.json`, the append-only list of released versions
//! - **module**: the generated source file embedding version + changelog
//!
//! # Example layout
//!
//! ```text
//! version.json      {"version": "2.0.0"}
//! CHANGELOG.md      Fixed bug.
//! versions.json     [{"version": "1.0.0"}, {"version": "2.0.0"}]
//! version/version.go
//! ```

pub mod changelog;
pub mod descriptor;
pub mod history;
pub mod module;

pub use changelog::ChangelogDocument;
pub use descriptor::VersionDescriptor;
pub use history::{VersionHistory, VersionRecord};
pub use module::GeneratedVersionModule;

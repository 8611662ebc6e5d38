//! `version-relay read`: expose version, changelog and date as workflow outputs

use crate::core::config::DateFormat;
use crate::core::context::RelayContext;
use crate::core::error::RelayResult;
use crate::release::{ChangelogDocument, VersionDescriptor};
use crate::workflow::date::current_date;
use crate::workflow::{CommandSink, FileSink, OutputSink};
use serde::Serialize;

/// The three outputs, in emission order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadOutputs {
  pub version: String,
  pub changelog: String,
  pub current_date: String,
}

impl ReadOutputs {
  /// Load and validate both inputs; nothing is emitted if either fails
  pub fn collect(ctx: &RelayContext, date_format: DateFormat) -> RelayResult<Self> {
    let descriptor = VersionDescriptor::load(&ctx.version_file())?;
    let changelog = ChangelogDocument::load(&ctx.changelog())?;

    Ok(Self {
      version: descriptor.version,
      changelog: changelog.as_str().to_string(),
      current_date: current_date(date_format),
    })
  }

  pub fn pairs(&self) -> [(&'static str, &str); 3] {
    [
      ("version", self.version.as_str()),
      ("changelog", self.changelog.as_str()),
      ("current_date", self.current_date.as_str()),
    ]
  }

  pub fn emit(&self, sink: &mut dyn OutputSink) -> RelayResult<()> {
    for (name, value) in self.pairs() {
      sink.set_output(name, value)?;
    }
    Ok(())
  }
}

/// Run the read command
pub fn run_read(ctx: &RelayContext, date_format: Option<DateFormat>, json: bool) -> RelayResult<()> {
  let date_format = date_format.unwrap_or(ctx.config.read.date_format);
  let outputs = ReadOutputs::collect(ctx, date_format)?;

  tracing::info!(version = %outputs.version, date = %outputs.current_date, "read release inputs");

  if json {
    println!("{}", serde_json::to_string_pretty(&outputs)?);
    return Ok(());
  }

  match &ctx.inputs.output_file {
    Some(path) => {
      tracing::debug!("writing outputs to {}", path.display());
      outputs.emit(&mut FileSink::new(path))
    }
    None => {
      tracing::debug!("no output file configured, emitting workflow commands on stdout");
      outputs.emit(&mut CommandSink::new(std::io::stdout().lock()))
    }
  }
}

//! Diagnostic logging setup
//!
//! Logs always go to stderr: stdout is reserved for workflow commands and
//! JSON output consumed by the orchestrator.

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the verbosity flags
pub const LOG_ENV: &str = "RELAY_LOG";

/// Filter directive for a `-v` count
pub fn level_for(verbose: u8) -> &'static str {
  match verbose {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  }
}

/// Initialize tracing for the process
pub fn init_logging(verbose: u8) {
  // RELAY_LOG, then RUST_LOG, then the -v count
  let filter = EnvFilter::try_from_env(LOG_ENV)
    .or_else(|_| EnvFilter::try_from_default_env())
    .unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(verbose >= 2)
    .with_line_number(verbose >= 3)
    .init();

  tracing::trace!("args: {:?}", std::env::args().collect::<Vec<_>>());
}

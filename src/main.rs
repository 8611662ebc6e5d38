mod commands;
mod core;
mod logging;
mod release;
mod workflow;

use clap::{Parser, Subcommand};
use crate::core::config::{DateFormat, ModuleTarget};
use crate::core::context::RelayContext;
use crate::core::error::{ExitCode, RelayError, print_error};
use crate::core::inputs::ActionInputs;

/// Propagate version numbers and changelogs between CI release artifacts
#[derive(Parser)]
#[command(name = "version-relay")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct RelayCli {
  /// Increase log verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, global = true, action = clap::ArgAction::Count)]
  verbose: u8,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Emit version, changelog and current_date as workflow outputs
  Read {
    /// Date style for current_date (overrides relay.toml)
    #[arg(long, value_enum)]
    date_format: Option<DateFormat>,
    /// Print the outputs as a JSON object instead
    #[arg(long)]
    json: bool,
  },

  /// Append a version to the release history (no-op when empty)
  Append {
    /// Version to record (default: the INPUT_VERSION action input)
    #[arg(value_name = "VERSION")]
    release: Option<String>,
    /// Start a new history if the file does not exist
    #[arg(long)]
    create: bool,
  },

  /// Generate the source module embedding version and changelog
  Generate {
    /// Target language (overrides relay.toml)
    #[arg(long, value_enum)]
    target: Option<ModuleTarget>,
    /// Print the module instead of writing it
    #[arg(long)]
    stdout: bool,
  },

  /// Show the recorded release history
  History {
    /// Output history in JSON format
    #[arg(long)]
    json: bool,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = match RelayCli::try_parse() {
    Ok(cli) => cli,
    // --help and --version
    Err(e) if !e.use_stderr() => e.exit(),
    Err(e) => {
      let _ = e.print();
      std::process::exit(ExitCode::User.as_i32());
    }
  };
  logging::init_logging(cli.verbose);

  let workspace_root = match std::env::current_dir() {
    Ok(dir) => dir,
    Err(e) => {
      eprintln!("Error: Failed to get current directory: {}", e);
      std::process::exit(1);
    }
  };

  // The only place the process environment is read
  let inputs = ActionInputs::from_env();

  let ctx = match RelayContext::build(&workspace_root, inputs) {
    Ok(ctx) => ctx,
    Err(e) => handle_error(e),
  };

  let result = match cli.command {
    Commands::Read { date_format, json } => commands::run_read(&ctx, date_format, json),
    Commands::Append { release, create } => {
      let ctx = match release {
        Some(version) => RelayContext {
          inputs: ctx.inputs.clone().with_input(commands::append::VERSION_INPUT, version),
          ..ctx
        },
        None => ctx,
      };
      commands::run_append(&ctx, create)
    }
    Commands::Generate { target, stdout } => commands::run_generate(&ctx, target, stdout),
    Commands::History { json } => commands::run_history(&ctx, json),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: RelayError) -> ! {
  tracing::debug!("command failed: {:?}", err);
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}

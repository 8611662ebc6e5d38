//! `version-relay generate`: write the version module compiled into the product

use crate::core::config::ModuleTarget;
use crate::core::context::RelayContext;
use crate::core::error::RelayResult;
use crate::core::fs::write_atomic;
use crate::release::{ChangelogDocument, GeneratedVersionModule, VersionDescriptor};

/// Render the module source for the current inputs
pub fn render_module(ctx: &RelayContext, target: ModuleTarget) -> RelayResult<String> {
  let descriptor = VersionDescriptor::load(&ctx.version_file())?;
  let changelog = ChangelogDocument::load(&ctx.changelog())?;

  GeneratedVersionModule::new(target, &ctx.config.generate.package, &descriptor, &changelog).render()
}

/// Run the generate command
///
/// The output directory must already exist; it is never created here.
pub fn run_generate(ctx: &RelayContext, target: Option<ModuleTarget>, stdout: bool) -> RelayResult<()> {
  let mut generate = ctx.config.generate.clone();
  if let Some(target) = target {
    generate.target = target;
  }

  let source = render_module(ctx, generate.target)?;

  if stdout {
    print!("{}", source);
    return Ok(());
  }

  let path = ctx.resolve(&generate.output_path());
  write_atomic(&path, source.as_bytes())?;

  tracing::info!(language = %generate.target, "generated {}", path.display());
  println!("✅ Generated {}", generate.output_path().display());

  Ok(())
}

// src/app.rs
use crate::cli::Args;
use crate::config::Config;
use crate::{logging, output};
use anyhow::{Context, Result};
use origen_shared_kernel::VersionDescriptor;
use tracing::info;

/// Entry point used by the binary: logging first, then the command itself.
pub fn run(args: &Args, descriptor: VersionDescriptor) -> Result<()> {
    logging::init(&args.log).context("failed to initialise logging")?;
    info!(release = descriptor.is_release(), "origen v{descriptor}");
    execute(args, descriptor)
}

/// Runs the command without touching the global subscriber.
pub fn execute(args: &Args, descriptor: VersionDescriptor) -> Result<()> {
    let config = Config::from_args(args, descriptor).context("failed to build configuration")?;
    output::emit(&config).context("failed to emit output")?;
    Ok(())
}

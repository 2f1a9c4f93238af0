// src/config.rs
use crate::cli::{Args, OutputFormat};
use origen_shared_kernel::{ErrorContext, Result, VersionDescriptor};
use std::path::PathBuf;
use tracing::debug;

/// Effective settings for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Descriptor after `--pre` / `--release` have been applied.
    pub descriptor: VersionDescriptor,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub compare: Option<VersionDescriptor>,
    pub show_version: bool,
}

impl Config {
    pub fn from_args(args: &Args, current: VersionDescriptor) -> Result<Self> {
        let descriptor = match (args.pre, args.release) {
            (Some(iteration), _) => current.with_dev_iteration(iteration),
            (None, true) => current.without_dev_iteration(),
            (None, false) => current,
        };

        let compare = args
            .compare
            .as_deref()
            .map(|raw| VersionDescriptor::parse(raw).context("invalid --compare value"))
            .transpose()?;

        debug!(%descriptor, ?compare, format = ?args.format, "resolved configuration");

        Ok(Self {
            descriptor,
            format: args.format,
            output: args.output.clone(),
            compare,
            show_version: args.show_version,
        })
    }
}

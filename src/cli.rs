// src/cli.rs
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the version report.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

/// Top-level CLI arguments parsed via clap.
///
/// The built-in `--version` flag is replaced so that the printed text comes
/// from the descriptor the binary constructed at start-up.
#[derive(Parser, Debug)]
#[command(
    name = "origen-version",
    about = "Print and inspect the Origen version",
    disable_version_flag = true
)]
pub struct Args {
    /// Print `origen <version>` and exit
    #[arg(short = 'V', long = "version")]
    pub show_version: bool,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Report the current triple as development iteration N
    #[arg(long, value_name = "N", conflicts_with = "release")]
    pub pre: Option<u32>,

    /// Report the current triple as a release build
    #[arg(long)]
    pub release: bool,

    /// Compare the current version against VERSION
    #[arg(long, value_name = "VERSION")]
    pub compare: Option<String>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Log filter (trace, debug, info, warn, error or tracing directives)
    #[arg(long, default_value = "warn")]
    pub log: String,
}

// src/output.rs
use std::cmp::Ordering;
use std::fmt;
use std::io::Write;

use origen_shared_kernel::{InfrastructureError, Result, VersionDescriptor};
use serde::Serialize;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::config::Config;

/// Serializable snapshot of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionReport {
    pub version: String,
    pub major: u32,
    pub minor: u32,
    pub bugfix: u32,
    pub dev_iteration: Option<u32>,
    pub release: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
}

impl From<&VersionDescriptor> for VersionReport {
    fn from(d: &VersionDescriptor) -> Self {
        Self {
            version: d.render(),
            major: d.major(),
            minor: d.minor(),
            bugfix: d.bugfix(),
            dev_iteration: d.dev_iteration(),
            release: d.is_release(),
            comparison: None,
        }
    }
}

impl VersionReport {
    pub fn from_config(config: &Config) -> Self {
        let mut report = Self::from(&config.descriptor);
        report.comparison = config
            .compare
            .as_ref()
            .map(|other| Comparison::between(&config.descriptor, other));
        report
    }
}

/// How the reported version orders against another one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    Older,
    Same,
    Newer,
}

impl From<Ordering> for Relation {
    fn from(value: Ordering) -> Self {
        match value {
            Ordering::Less => Self::Older,
            Ordering::Equal => Self::Same,
            Ordering::Greater => Self::Newer,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Older => "older than",
            Self::Same => "the same as",
            Self::Newer => "newer than",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub against: String,
    pub relation: Relation,
}

impl Comparison {
    pub fn between(current: &VersionDescriptor, other: &VersionDescriptor) -> Self {
        Self { against: other.render(), relation: current.cmp(other).into() }
    }
}

/// Emit the report (or the `--version` line) to the configured destination.
pub fn emit(config: &Config) -> Result<()> {
    let mut writer = OutputWriter::create(config)?;
    if config.show_version {
        writeln!(writer, "origen {}", config.descriptor)?;
    } else {
        let report = VersionReport::from_config(config);
        write_report(&report, config.format, &mut writer)?;
    }
    writer.flush()?;
    Ok(())
}

/// Serialize `report` in `format` into `out`.
pub fn write_report<W: Write>(report: &VersionReport, format: OutputFormat, out: &mut W) -> Result<()> {
    debug!(?format, version = %report.version, "writing report");
    match format {
        OutputFormat::Text => output_text(report, out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *out, report)?,
    }
    Ok(())
}

fn output_text<W: Write>(report: &VersionReport, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", report.version)?;
    if let Some(cmp) = &report.comparison {
        writeln!(out, "{} is {} {}", report.version, cmp.relation, cmp.against)?;
    }
    Ok(())
}

struct OutputWriter(Box<dyn Write>);
impl OutputWriter {
    fn create(config: &Config) -> Result<Self> {
        let writer: Box<dyn Write> = if let Some(path) = &config.output {
            let file = std::fs::File::create(path)
                .map_err(|source| InfrastructureError::FileWrite { path: path.clone(), source })?;
            Box::new(std::io::BufWriter::new(file))
        } else {
            Box::new(std::io::BufWriter::new(std::io::stdout()))
        };
        Ok(Self(writer))
    }
}
impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.write(buf)
    }
    fn flush(&mut self) -> std::io::Result<()> {
        self.0.flush()
    }
}

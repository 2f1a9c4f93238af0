// crates/shared-kernel/src/value_objects/version.rs
use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult, VersionParseError};

const PRE_PREFIX: &str = "pre";

/// Immutable `major.minor.bugfix` triple with an optional development iteration.
///
/// A descriptor without a development iteration is a release build. With one,
/// it renders as `major.minor.bugfix.preN` and orders before the release of
/// the same triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct VersionDescriptor {
    major: u32,
    minor: u32,
    bugfix: u32,
    dev_iteration: Option<u32>,
}

impl VersionDescriptor {
    #[inline]
    pub const fn new(major: u32, minor: u32, bugfix: u32) -> Self {
        Self { major, minor, bugfix, dev_iteration: None }
    }

    /// Pre-release descriptor of the same triple.
    #[inline]
    pub const fn with_dev_iteration(self, iteration: u32) -> Self {
        Self { dev_iteration: Some(iteration), ..self }
    }

    #[inline]
    pub const fn without_dev_iteration(self) -> Self {
        Self { dev_iteration: None, ..self }
    }

    #[inline]
    pub const fn major(self) -> u32 {
        self.major
    }

    #[inline]
    pub const fn minor(self) -> u32 {
        self.minor
    }

    #[inline]
    pub const fn bugfix(self) -> u32 {
        self.bugfix
    }

    #[inline]
    pub const fn dev_iteration(self) -> Option<u32> {
        self.dev_iteration
    }

    #[inline]
    pub const fn is_release(self) -> bool {
        self.dev_iteration.is_none()
    }

    #[inline]
    pub const fn is_pre_release(self) -> bool {
        self.dev_iteration.is_some()
    }

    /// Dotted representation, with `.preN` appended for development builds.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Parses `input`, keeping the offending text in the error.
    pub fn parse(input: &str) -> DomainResult<Self> {
        input.parse().map_err(|source| DomainError::InvalidVersion {
            input: input.to_string(),
            source,
        })
    }

    fn parse_component(component: &'static str, value: &str) -> Result<u32, VersionParseError> {
        let invalid = || VersionParseError::InvalidNumber { component, value: value.to_string() };
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if value.len() > 1 && value.starts_with('0') {
            return Err(VersionParseError::LeadingZero { component, value: value.to_string() });
        }
        value.parse().map_err(|_| invalid())
    }
}

impl fmt::Display for VersionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.bugfix)?;
        if let Some(iteration) = self.dev_iteration {
            write!(f, ".{PRE_PREFIX}{iteration}")?;
        }
        Ok(())
    }
}

impl FromStr for VersionDescriptor {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(VersionParseError::Empty);
        }

        let parts: Vec<&str> = s.split('.').collect();
        let (major, minor, bugfix, suffix) = match parts.as_slice() {
            [major, minor, bugfix] => (*major, *minor, *bugfix, None),
            [major, minor, bugfix, suffix] => (*major, *minor, *bugfix, Some(*suffix)),
            other => return Err(VersionParseError::ComponentCount { found: other.len() }),
        };

        let descriptor = Self::new(
            Self::parse_component("major", major)?,
            Self::parse_component("minor", minor)?,
            Self::parse_component("bugfix", bugfix)?,
        );

        let Some(suffix) = suffix else {
            return Ok(descriptor);
        };
        let digits = suffix
            .strip_prefix(PRE_PREFIX)
            .filter(|d| !d.is_empty())
            .ok_or_else(|| VersionParseError::InvalidSuffix { suffix: suffix.to_string() })?;
        Ok(descriptor.with_dev_iteration(Self::parse_component("dev iteration", digits)?))
    }
}

impl Ord for VersionDescriptor {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.bugfix)
            .cmp(&(other.major, other.minor, other.bugfix))
            .then_with(|| match (self.dev_iteration, other.dev_iteration) {
                (None, None) => Ordering::Equal,
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (Some(a), Some(b)) => a.cmp(&b),
            })
    }
}

impl PartialOrd for VersionDescriptor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<VersionDescriptor> for String {
    fn from(value: VersionDescriptor) -> Self {
        value.render()
    }
}

impl TryFrom<String> for VersionDescriptor {
    type Error = VersionParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

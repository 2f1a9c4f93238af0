// src/version.rs
//! Version constants for this build of Origen.
//!
//! Release builds leave the development iteration unset. Pipelines producing
//! pre-release artifacts set `ORIGEN_DEV_ITERATION` to a decimal integer at
//! compile time; an empty value is treated as unset.

use origen_shared_kernel::VersionDescriptor;

pub const MAJOR: u32 = 0;
pub const MINOR: u32 = 7;
pub const BUGFIX: u32 = 47;

pub const DEV_ITERATION: Option<u32> = parse_dev_iteration(option_env!("ORIGEN_DEV_ITERATION"));

/// Descriptor for this build. Construct it once and hand it to whatever needs it.
pub const fn current() -> VersionDescriptor {
    let release = VersionDescriptor::new(MAJOR, MINOR, BUGFIX);
    match DEV_ITERATION {
        Some(iteration) => release.with_dev_iteration(iteration),
        None => release,
    }
}

const fn parse_dev_iteration(raw: Option<&str>) -> Option<u32> {
    let Some(raw) = raw else {
        return None;
    };
    let bytes = raw.as_bytes();
    if bytes.is_empty() {
        return None;
    }

    let mut value: u32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let digit = bytes[i];
        if !digit.is_ascii_digit() {
            panic!("ORIGEN_DEV_ITERATION must be a decimal integer");
        }
        value = match value.checked_mul(10) {
            Some(v) => match v.checked_add((digit - b'0') as u32) {
                Some(v) => v,
                None => panic!("ORIGEN_DEV_ITERATION does not fit in u32"),
            },
            None => panic!("ORIGEN_DEV_ITERATION does not fit in u32"),
        };
        i += 1;
    }
    Some(value)
}

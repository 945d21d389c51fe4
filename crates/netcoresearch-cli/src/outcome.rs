//! Exit codes for every terminal outcome

use netcoresearch_resolve::{ResolveError, Version};
use std::fmt;

pub const EXIT_FOUND: u8 = 0;
pub const EXIT_NO_MATCH: u8 = 1;
pub const EXIT_INVALID_ARGUMENT: u8 = 2;
pub const EXIT_FACILITY_LOAD: u8 = 10;
pub const EXIT_ENTRY_POINT: u8 = 11;
pub const EXIT_FACILITY_INVOCATION: u8 = 12;
pub const EXIT_PARSE: u8 = 13;
pub const EXIT_COMPARE: u8 = 14;
pub const EXIT_OTHER: u8 = 20;

/// A successful run: either a version or nothing matched
#[derive(Debug)]
pub enum Outcome {
    Found(Version),
    NoMatch,
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Found(_) => EXIT_FOUND,
            Outcome::NoMatch => EXIT_NO_MATCH,
        }
    }
}

impl From<Option<Version>> for Outcome {
    fn from(version: Option<Version>) -> Self {
        version.map_or(Outcome::NoMatch, Outcome::Found)
    }
}

/// The major version argument is not an unsigned integer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidMajor(pub String);

impl fmt::Display for InvalidMajor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a valid major version.", self.0)
    }
}

impl std::error::Error for InvalidMajor {}

pub fn parse_major(raw: &str) -> Result<u32, InvalidMajor> {
    raw.trim().parse::<u32>().map_err(|_| InvalidMajor(raw.to_string()))
}

/// Exit code for a failed run, chosen by the stage that failed
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    if let Some(err) = err.downcast_ref::<ResolveError>() {
        return match err {
            ResolveError::Locate(_) | ResolveError::FacilityLoad { .. } => EXIT_FACILITY_LOAD,
            ResolveError::EntryPointNotFound { .. } => EXIT_ENTRY_POINT,
            ResolveError::FacilityInvocation { .. } => EXIT_FACILITY_INVOCATION,
            ResolveError::Parse { .. } => EXIT_PARSE,
            ResolveError::Compare { .. } => EXIT_COMPARE,
        };
    }

    if err.downcast_ref::<InvalidMajor>().is_some() {
        return EXIT_INVALID_ARGUMENT;
    }

    EXIT_OTHER
}

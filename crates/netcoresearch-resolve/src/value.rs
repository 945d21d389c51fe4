use std::cmp::Ordering;

use netcoresearch_version::{Version, VersionError};

/// The operations the selector needs from a version.
///
/// Values are owned singly: the selector moves them into its best slot and
/// drops whatever they replace.
pub trait VersionValue: Sized {
    fn parse(raw: &str) -> Result<Self, VersionError>;

    fn major(&self) -> u32;

    /// Three-way comparison that may fail for structurally incomparable values
    fn try_compare(&self, other: &Self) -> Result<Ordering, VersionError>;
}

impl VersionValue for Version {
    fn parse(raw: &str) -> Result<Self, VersionError> {
        Version::parse(raw)
    }

    fn major(&self) -> u32 {
        Version::major(self)
    }

    fn try_compare(&self, other: &Self) -> Result<Ordering, VersionError> {
        self.try_cmp(other)
    }
}

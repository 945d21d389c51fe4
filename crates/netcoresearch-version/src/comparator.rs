//! Version comparison utilities

use std::cmp::Ordering;

use crate::error::{Result, VersionError};
use crate::version::{ReleaseLabel, Version};

impl Version {
    /// Three-way comparison that fails when either side is invalid.
    ///
    /// Numeric components are compared first, then release labels. A version
    /// without labels sorts after the same version with labels. Metadata never
    /// takes part in the ordering.
    pub fn try_cmp(&self, other: &Version) -> Result<Ordering> {
        if self.is_invalid() || other.is_invalid() {
            return Err(VersionError::Compare {
                left: self.as_str().to_string(),
                right: other.as_str().to_string(),
            });
        }

        let numeric = (self.major, self.minor, self.patch, self.revision).cmp(&(
            other.major,
            other.minor,
            other.patch,
            other.revision,
        ));
        if numeric != Ordering::Equal {
            return Ok(numeric);
        }

        Ok(compare_release_labels(&self.release_labels, &other.release_labels))
    }
}

fn compare_release_labels(left: &[ReleaseLabel], right: &[ReleaseLabel]) -> Ordering {
    match (left.is_empty(), right.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }

    for (a, b) in left.iter().zip(right) {
        let ordering = match (a, b) {
            (ReleaseLabel::Numeric(a), ReleaseLabel::Numeric(b)) => a.cmp(b),
            (ReleaseLabel::Numeric(_), ReleaseLabel::Text(_)) => Ordering::Less,
            (ReleaseLabel::Text(_), ReleaseLabel::Numeric(_)) => Ordering::Greater,
            (ReleaseLabel::Text(a), ReleaseLabel::Text(b)) => a
                .bytes()
                .map(|c| c.to_ascii_lowercase())
                .cmp(b.bytes().map(|c| c.to_ascii_lowercase())),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    left.len().cmp(&right.len())
}

/// Comparator for comparing raw version strings
pub struct Comparator;

impl Comparator {
    /// Parse both strings leniently and compare them
    pub fn compare(version1: &str, version2: &str) -> Result<Ordering> {
        let left = Version::parse(version1)?;
        let right = Version::parse(version2)?;
        left.try_cmp(&right)
    }

    /// Check if version1 > version2
    pub fn greater_than(version1: &str, version2: &str) -> Result<bool> {
        Ok(Self::compare(version1, version2)? == Ordering::Greater)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &str, version2: &str) -> Result<bool> {
        Ok(Self::compare(version1, version2)? != Ordering::Less)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &str, version2: &str) -> Result<bool> {
        Ok(Self::compare(version1, version2)? == Ordering::Less)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &str, version2: &str) -> Result<bool> {
        Ok(Self::compare(version1, version2)? != Ordering::Greater)
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &str, version2: &str) -> Result<bool> {
        Ok(Self::compare(version1, version2)? == Ordering::Equal)
    }
}

//! Version parsing module

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::fmt;

use crate::error::{Result, VersionError};

lazy_static! {
    // Numeric head shared by the full and the lenient pattern
    static ref NUMERIC_HEAD: &'static str = r"^[vV]?(\d+)(?:\.(\d+))?(?:\.(\d+))?(?:\.(\d+))?";

    // Complete version: numeric head, optional release labels, optional metadata
    static ref VERSION_RE: Regex = Regex::new(&format!(
        r"{}(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+([0-9A-Za-z.-]+))?$",
        *NUMERIC_HEAD
    )).unwrap();

    // Numeric head only, used when the full pattern rejects the tail
    static ref LEADING_RE: Regex = Regex::new(*NUMERIC_HEAD).unwrap();
}

/// A single dot-separated label of the release part (`-preview.1`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseLabel {
    Numeric(u32),
    Text(String),
}

impl ReleaseLabel {
    fn parse(label: &str) -> Self {
        if label.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(value) = label.parse::<u32>() {
                return ReleaseLabel::Numeric(value);
            }
        }
        ReleaseLabel::Text(label.to_string())
    }
}

impl fmt::Display for ReleaseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseLabel::Numeric(value) => write!(f, "{}", value),
            ReleaseLabel::Text(text) => f.write_str(text),
        }
    }
}

/// A parsed version.
///
/// A `Version` has exactly one owner; it is neither `Clone` nor ordered through
/// `PartialOrd`. Use [`Version::try_cmp`] to order two values.
#[derive(Debug)]
pub struct Version {
    text: String,
    pub(crate) major: u32,
    pub(crate) minor: u32,
    pub(crate) patch: u32,
    pub(crate) revision: u32,
    pub(crate) release_labels: Vec<ReleaseLabel>,
    metadata: Option<String>,
    invalid_tail: Option<String>,
}

impl Version {
    /// Parse a version leniently.
    ///
    /// Text with a valid numeric head but a malformed tail (`6.0.1_x`) still
    /// parses; the result is flagged invalid and refuses to be compared.
    pub fn parse(raw: &str) -> Result<Self> {
        if let Some(caps) = VERSION_RE.captures(raw) {
            let mut version = Self::from_head(raw, &caps)?;
            if let Some(labels) = caps.get(5) {
                version.release_labels = labels.as_str().split('.').map(ReleaseLabel::parse).collect();
            }
            version.metadata = caps.get(6).map(|m| m.as_str().to_string());
            return Ok(version);
        }

        let caps = LEADING_RE.captures(raw).ok_or_else(|| parse_error(raw))?;
        let head_len = caps.get(0).map(|m| m.end()).unwrap_or(0);
        let mut version = Self::from_head(raw, &caps)?;
        version.invalid_tail = Some(raw[head_len..].to_string());
        Ok(version)
    }

    /// Parse a version, rejecting anything [`Version::parse`] would flag invalid.
    pub fn parse_strict(raw: &str) -> Result<Self> {
        let version = Self::parse(raw)?;
        if version.is_invalid() {
            return Err(parse_error(raw));
        }
        Ok(version)
    }

    fn from_head(raw: &str, caps: &Captures<'_>) -> Result<Self> {
        let component = |index: usize| -> Result<u32> {
            match caps.get(index) {
                Some(m) => m.as_str().parse::<u32>().map_err(|_| parse_error(raw)),
                None => Ok(0),
            }
        };

        let text = raw.strip_prefix(['v', 'V']).unwrap_or(raw);

        Ok(Self {
            text: text.to_string(),
            major: component(1)?,
            minor: component(2)?,
            patch: component(3)?,
            revision: component(4)?,
            release_labels: Vec::new(),
            metadata: None,
            invalid_tail: None,
        })
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }

    pub fn revision(&self) -> u32 {
        self.revision
    }

    /// Labels of the release part, empty for a release version
    pub fn release_labels(&self) -> &[ReleaseLabel] {
        &self.release_labels
    }

    /// Build metadata after `+`, ignored for ordering
    pub fn metadata(&self) -> Option<&str> {
        self.metadata.as_deref()
    }

    /// Whether the text had a tail that could not be parsed
    pub fn is_invalid(&self) -> bool {
        self.invalid_tail.is_some()
    }

    /// The version text without a leading `v`
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn parse_error(raw: &str) -> VersionError {
    VersionError::Parse {
        raw: raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_version() {
        let v = Version::parse("6.0.100-rc.2.22477.23+4a5b6c").unwrap();
        assert_eq!((v.major(), v.minor(), v.patch(), v.revision()), (6, 0, 100, 0));
        assert_eq!(
            v.release_labels(),
            &[
                ReleaseLabel::Text("rc".to_string()),
                ReleaseLabel::Numeric(2),
                ReleaseLabel::Numeric(22477),
                ReleaseLabel::Numeric(23),
            ]
        );
        assert_eq!(v.metadata(), Some("4a5b6c"));
        assert!(!v.is_invalid());
    }

    #[test]
    fn test_parse_missing_components_default_to_zero() {
        let v = Version::parse("8").unwrap();
        assert_eq!((v.major(), v.minor(), v.patch(), v.revision()), (8, 0, 0, 0));

        let v = Version::parse("1.2.3.4").unwrap();
        assert_eq!(v.revision(), 4);
    }

    #[test]
    fn test_parse_strips_v_prefix_for_display() {
        let v = Version::parse("v6.0.1").unwrap();
        assert_eq!(v.to_string(), "6.0.1");
        assert_eq!(Version::parse("V7.0").unwrap().as_str(), "7.0");
    }

    #[test]
    fn test_parse_malformed_tail_is_lenient() {
        let v = Version::parse("6.0.1_x").unwrap();
        assert!(v.is_invalid());
        assert_eq!(v.major(), 6);
        assert_eq!(v.as_str(), "6.0.1_x");

        assert!(Version::parse("1.2.3.4.5").unwrap().is_invalid());
        assert!(Version::parse("6.0.").unwrap().is_invalid());
    }

    #[test]
    fn test_parse_rejects_text_without_numeric_head() {
        for raw in ["", "v", "abc", ".5", " 6.0.1", "-1.0"] {
            assert_eq!(
                Version::parse(raw).unwrap_err(),
                VersionError::Parse { raw: raw.to_string() },
                "{raw:?} should not parse"
            );
        }
    }

    #[test]
    fn test_parse_rejects_overflowing_component() {
        assert!(Version::parse("4294967296.0.0").is_err());
        assert!(Version::parse("4294967295.0.0").is_ok());
    }

    #[test]
    fn test_parse_strict() {
        assert!(Version::parse_strict("6.0.100").is_ok());
        assert!(Version::parse_strict("6.0.100 preview").is_err());
    }

    #[test]
    fn test_oversized_numeric_label_is_text() {
        let v = Version::parse("1.0.0-99999999999").unwrap();
        assert_eq!(v.release_labels(), &[ReleaseLabel::Text("99999999999".to_string())]);
    }
}

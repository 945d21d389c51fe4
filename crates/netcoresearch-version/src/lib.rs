//! Version values for installed .NET SDKs and frameworks
//!
//! Versions follow the lenient `major[.minor[.patch[.revision]]][-labels][+metadata]`
//! format reported by the .NET host. Parsing and comparison are both fallible:
//! a version with an unparseable tail still parses, but it cannot be ordered
//! against anything.
//!
//! # Example
//!
//! ```
//! use netcoresearch_version::Version;
//! use std::cmp::Ordering;
//!
//! let a = Version::parse("6.0.100").unwrap();
//! let b = Version::parse("6.0.300-preview.1").unwrap();
//! assert_eq!(a.try_cmp(&b).unwrap(), Ordering::Less);
//! ```

mod comparator;
mod error;
mod version;

pub use comparator::Comparator;
pub use error::{Result, VersionError};
pub use version::{ReleaseLabel, Version};

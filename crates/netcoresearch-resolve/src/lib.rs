//! Resolution of the newest installed .NET SDK or shared framework
//!
//! A resolution loads hostfxr, asks it once for the installed environment and
//! feeds the reported entries through a [`Selector`]:
//!
//! ```text
//! Session ──▶ hostfxr enumeration ──▶ candidates ──▶ Selector ──▶ Option<Version>
//! ```
//!
//! A single malformed or incomparable entry aborts the whole resolution.

mod candidate;
mod error;
mod selector;
mod session;
mod target;
mod value;

pub use candidate::{candidates, Candidate};
pub use error::{ResolveError, Result};
pub use selector::Selector;
pub use session::{resolve_from_source, resolve_with_hostfxr, Resolver};
pub use target::{ResolveRequest, Target};
pub use value::VersionValue;

pub use netcoresearch_version::Version;

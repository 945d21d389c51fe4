//! Bindings to the .NET host resolver (`hostfxr`)
//!
//! Only the environment enumeration entry point is bound. The library is
//! loaded at runtime with [`libloading`], so nothing links against the .NET
//! host at build time.
//!
//! ```no_run
//! use netcoresearch_hostfxr::{EnvironmentSource, HostFxr};
//!
//! let hostfxr = HostFxr::load(HostFxr::locate_beside_executable()?)?;
//! let entry = hostfxr.environment_info()?;
//! entry.enumerate(&mut |batch| {
//!     for sdk in &batch.sdks {
//!         println!("{}", sdk.version);
//!     }
//! })?;
//! # Ok::<(), netcoresearch_hostfxr::LoaderError>(())
//! ```

mod batch;
pub mod ffi;
mod loader;

pub use batch::{EnvironmentBatch, FrameworkEntry, SdkEntry};
pub use loader::{invoke_environment_info, EnvironmentInfoEntry, EnvironmentSource, HostFxr, LoaderError, Result};

use std::path::PathBuf;

use netcoresearch_hostfxr::LoaderError;
use netcoresearch_version::VersionError;
use thiserror::Error;

/// Terminal failure of a resolution; every variant names the failing stage
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Failed to locate hostfxr")]
    Locate(#[source] LoaderError),

    #[error("Failed to load hostfxr from {}", path.display())]
    FacilityLoad {
        path: PathBuf,
        #[source]
        source: LoaderError,
    },

    #[error("hostfxr does not export {symbol}")]
    EntryPointNotFound {
        symbol: &'static str,
        #[source]
        source: LoaderError,
    },

    #[error("Failed to get .NET environment info: {symbol} returned {status:#010x}")]
    FacilityInvocation { symbol: &'static str, status: i32 },

    #[error("Failed to parse version \"{raw}\"")]
    Parse { raw: String },

    #[error("Failed to compare version \"{left}\" with \"{right}\"")]
    Compare { left: String, right: String },
}

pub type Result<T> = std::result::Result<T, ResolveError>;

impl From<VersionError> for ResolveError {
    fn from(err: VersionError) -> Self {
        match err {
            VersionError::Parse { raw } => ResolveError::Parse { raw },
            VersionError::Compare { left, right } => ResolveError::Compare { left, right },
        }
    }
}

impl From<LoaderError> for ResolveError {
    fn from(err: LoaderError) -> Self {
        match err {
            LoaderError::LoadFailed { ref path, .. } => ResolveError::FacilityLoad {
                path: path.clone(),
                source: err,
            },
            LoaderError::SymbolNotFound { symbol, .. } => ResolveError::EntryPointNotFound { symbol, source: err },
            LoaderError::InvocationFailed { symbol, status } => ResolveError::FacilityInvocation { symbol, status },
            LoaderError::ExecutablePath(_) => ResolveError::Locate(err),
        }
    }
}

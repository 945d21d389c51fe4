//! One resolve call bound to one enumeration call

use std::path::{Path, PathBuf};

use netcoresearch_hostfxr::{EnvironmentSource, HostFxr};
use netcoresearch_version::Version;

use crate::candidate::candidates;
use crate::error::Result;
use crate::selector::Selector;
use crate::target::ResolveRequest;
use crate::value::VersionValue;

/// Resolve `request` against any environment source.
///
/// The source is asked exactly once. Its own failure takes precedence over
/// whatever the selector found; otherwise the selector's outcome is returned.
pub fn resolve_from_source<V, S>(source: &S, request: &ResolveRequest) -> Result<Option<V>>
where
    V: VersionValue,
    S: EnvironmentSource + ?Sized,
{
    let mut outcome: Option<Result<Option<V>>> = None;

    source.enumerate(&mut |batch| {
        if outcome.is_some() {
            log::warn!("Ignoring additional environment batch");
            return;
        }
        outcome = Some(Selector::new(request).select(candidates(batch, &request.target)));
    })?;

    match outcome {
        Some(result) => result,
        None => {
            log::debug!("No environment info was reported");
            Ok(None)
        }
    }
}

/// Load hostfxr from `path` and resolve `request` with it.
///
/// The library stays loaded only for the duration of this call.
pub fn resolve_with_hostfxr(path: &Path, request: &ResolveRequest) -> Result<Option<Version>> {
    let hostfxr = HostFxr::load(path)?;
    let entry = hostfxr.environment_info()?;
    resolve_from_source(&entry, request)
}

/// Resolves requests against one hostfxr location
#[derive(Debug, Clone)]
pub struct Resolver {
    hostfxr_path: PathBuf,
}

impl Resolver {
    pub fn new(hostfxr_path: impl Into<PathBuf>) -> Self {
        Self {
            hostfxr_path: hostfxr_path.into(),
        }
    }

    /// Use the hostfxr library shipped next to the running executable
    pub fn beside_executable() -> Result<Self> {
        Ok(Self::new(HostFxr::locate_beside_executable()?))
    }

    pub fn hostfxr_path(&self) -> &Path {
        &self.hostfxr_path
    }

    pub fn resolve(&self, request: &ResolveRequest) -> Result<Option<Version>> {
        log::debug!(
            "Resolving {} {} with {}",
            request.target,
            request.major,
            self.hostfxr_path.display()
        );

        let resolved = resolve_with_hostfxr(&self.hostfxr_path, request)?;
        match &resolved {
            Some(version) => log::info!("Resolved {} {} to {}", request.target, request.major, version),
            None => log::info!("No {} found for major version {}", request.target, request.major),
        }
        Ok(resolved)
    }
}

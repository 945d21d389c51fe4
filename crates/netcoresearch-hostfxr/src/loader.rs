//! Dynamic hostfxr loader
//!
//! [`HostFxr`] owns the loaded library for as long as it lives; the entry point
//! handed out by [`HostFxr::environment_info`] borrows it, so the library cannot
//! be unloaded while the entry point is still reachable.

use std::any::Any;
use std::ffi::{c_void, OsString};
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::ptr;

use libloading::{Library, Symbol};
use thiserror::Error;

use crate::batch::EnvironmentBatch;
use crate::ffi::{EnvironmentInfo, GetDotnetEnvironmentInfoFn, GET_DOTNET_ENVIRONMENT_INFO};

/// Errors that can occur while loading or calling hostfxr
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to locate the running executable")]
    ExecutablePath(#[source] std::io::Error),

    #[error("Failed to load library {}", path.display())]
    LoadFailed {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    #[error("Symbol not found: {symbol}")]
    SymbolNotFound {
        symbol: &'static str,
        #[source]
        source: libloading::Error,
    },

    #[error("{symbol} failed with status {status:#010x}")]
    InvocationFailed { symbol: &'static str, status: i32 },
}

pub type Result<T> = std::result::Result<T, LoaderError>;

/// Anything that can enumerate installed SDKs and frameworks.
///
/// `visitor` is called at most once, synchronously, before `enumerate`
/// returns.
pub trait EnvironmentSource {
    fn enumerate(&self, visitor: &mut dyn FnMut(&EnvironmentBatch)) -> Result<()>;
}

/// A captured batch replays itself
impl EnvironmentSource for EnvironmentBatch {
    fn enumerate(&self, visitor: &mut dyn FnMut(&EnvironmentBatch)) -> Result<()> {
        visitor(self);
        Ok(())
    }
}

/// A loaded hostfxr library
pub struct HostFxr {
    library: Library,
    path: PathBuf,
}

impl HostFxr {
    /// Load hostfxr from the given path
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading {}", path.display());

        let library = unsafe { open_library(path) }.map_err(|source| LoaderError::LoadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            library,
            path: path.to_path_buf(),
        })
    }

    /// Platform file name of the library (`hostfxr.dll`, `libhostfxr.so`, ...)
    pub fn library_file_name() -> OsString {
        libloading::library_filename("hostfxr")
    }

    /// Path of the library next to the running executable
    pub fn locate_beside_executable() -> Result<PathBuf> {
        let exe = std::env::current_exe().map_err(LoaderError::ExecutablePath)?;
        Ok(exe.with_file_name(Self::library_file_name()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve `hostfxr_get_dotnet_environment_info`
    pub fn environment_info(&self) -> Result<EnvironmentInfoEntry<'_>> {
        let function = unsafe {
            self.library
                .get::<GetDotnetEnvironmentInfoFn>(GET_DOTNET_ENVIRONMENT_INFO.as_bytes())
        }
        .map_err(|source| LoaderError::SymbolNotFound {
            symbol: GET_DOTNET_ENVIRONMENT_INFO,
            source,
        })?;

        log::debug!("Resolved {} in {}", GET_DOTNET_ENVIRONMENT_INFO, self.path.display());
        Ok(EnvironmentInfoEntry { function })
    }
}

impl Drop for HostFxr {
    fn drop(&mut self) {
        log::debug!("Unloading {}", self.path.display());
    }
}

#[cfg(windows)]
unsafe fn open_library(path: &Path) -> std::result::Result<Library, libloading::Error> {
    use libloading::os::windows::{Library as WindowsLibrary, LOAD_WITH_ALTERED_SEARCH_PATH};

    // Dependencies are searched next to hostfxr, not next to the executable
    WindowsLibrary::load_with_flags(path, LOAD_WITH_ALTERED_SEARCH_PATH).map(Library::from)
}

#[cfg(not(windows))]
unsafe fn open_library(path: &Path) -> std::result::Result<Library, libloading::Error> {
    Library::new(path)
}

/// The resolved enumeration entry point, borrowing its library
pub struct EnvironmentInfoEntry<'lib> {
    function: Symbol<'lib, GetDotnetEnvironmentInfoFn>,
}

impl EnvironmentSource for EnvironmentInfoEntry<'_> {
    fn enumerate(&self, visitor: &mut dyn FnMut(&EnvironmentBatch)) -> Result<()> {
        unsafe { invoke_environment_info(*self.function, visitor) }
    }
}

struct CallbackContext<'v> {
    visitor: &'v mut dyn FnMut(&EnvironmentBatch),
    invocations: usize,
    panic: Option<Box<dyn Any + Send + 'static>>,
}

/// Call an environment info entry point with no dotnet root filter, routing
/// its callback to `visitor`.
///
/// A failing (negative) status is an error even if the callback ran. A panic
/// raised by `visitor` is held across the foreign frames and resumed once the
/// entry point has returned.
///
/// # Safety
///
/// `function` must follow the `hostfxr_get_dotnet_environment_info` contract.
pub unsafe fn invoke_environment_info(
    function: GetDotnetEnvironmentInfoFn,
    visitor: &mut dyn FnMut(&EnvironmentBatch),
) -> Result<()> {
    let mut context = CallbackContext {
        visitor,
        invocations: 0,
        panic: None,
    };

    let status = function(
        ptr::null(),
        ptr::null_mut(),
        environment_info_result,
        &mut context as *mut CallbackContext<'_> as *mut c_void,
    );

    if let Some(payload) = context.panic.take() {
        panic::resume_unwind(payload);
    }

    log::debug!(
        "{} returned {:#010x} after {} callback(s)",
        GET_DOTNET_ENVIRONMENT_INFO,
        status,
        context.invocations
    );

    if status < 0 {
        return Err(LoaderError::InvocationFailed {
            symbol: GET_DOTNET_ENVIRONMENT_INFO,
            status,
        });
    }

    Ok(())
}

unsafe extern "C" fn environment_info_result(info: *const EnvironmentInfo, result_context: *mut c_void) {
    let Some(context) = (result_context as *mut CallbackContext<'_>).as_mut() else {
        return;
    };

    context.invocations += 1;
    if context.invocations > 1 {
        log::warn!("Ignoring repeated environment info callback #{}", context.invocations);
        return;
    }

    let Some(batch) = EnvironmentBatch::from_raw(info) else {
        log::warn!("hostfxr reported a null environment info");
        return;
    };

    log::debug!(
        "hostfxr {} reported {} sdk(s) and {} framework(s)",
        batch.hostfxr_version.as_deref().unwrap_or("<unknown>"),
        batch.sdks.len(),
        batch.frameworks.len()
    );

    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| (context.visitor)(&batch))) {
        context.panic = Some(payload);
    }
}

//! Raw `hostfxr` environment info ABI
//!
//! Layouts must match `hostfxr.h`. Every struct starts with its own `size` so
//! newer hosts can append fields.

use std::ffi::c_void;

/// Platform string unit: UTF-16 on Windows, narrow bytes elsewhere
#[cfg(windows)]
pub type CharT = u16;
#[cfg(not(windows))]
pub type CharT = std::ffi::c_char;

/// Name of the enumeration entry point
pub const GET_DOTNET_ENVIRONMENT_INFO: &str = "hostfxr_get_dotnet_environment_info";

#[repr(C)]
pub struct SdkInfo {
    pub size: usize,
    pub version: *const CharT,
    pub path: *const CharT,
}

#[repr(C)]
pub struct FrameworkInfo {
    pub size: usize,
    pub name: *const CharT,
    pub version: *const CharT,
    pub path: *const CharT,
}

#[repr(C)]
pub struct EnvironmentInfo {
    pub size: usize,
    pub hostfxr_version: *const CharT,
    pub hostfxr_commit_hash: *const CharT,
    pub sdk_count: usize,
    pub sdks: *const SdkInfo,
    pub framework_count: usize,
    pub frameworks: *const FrameworkInfo,
}

/// Callback receiving the environment info, invoked before the entry point returns
pub type EnvironmentInfoResultFn =
    unsafe extern "C" fn(info: *const EnvironmentInfo, result_context: *mut c_void);

/// `hostfxr_get_dotnet_environment_info`
pub type GetDotnetEnvironmentInfoFn = unsafe extern "C" fn(
    dotnet_root: *const CharT,
    reserved: *mut c_void,
    result: EnvironmentInfoResultFn,
    result_context: *mut c_void,
) -> i32;

/// Decode a nul terminated platform string, lossily. Null decodes to `None`.
///
/// # Safety
///
/// `ptr` must be null or point to a nul terminated `CharT` sequence.
pub unsafe fn platform_string(ptr: *const CharT) -> Option<String> {
    if ptr.is_null() {
        return None;
    }

    #[cfg(windows)]
    {
        let mut len = 0;
        while *ptr.add(len) != 0 {
            len += 1;
        }
        Some(String::from_utf16_lossy(std::slice::from_raw_parts(ptr, len)))
    }

    #[cfg(not(windows))]
    {
        Some(std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned())
    }
}

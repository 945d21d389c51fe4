//! Safe copy of one environment info descriptor

use std::path::PathBuf;
use std::slice;

use crate::ffi::{platform_string, EnvironmentInfo, FrameworkInfo, SdkInfo};

/// An installed SDK
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SdkEntry {
    pub version: String,
    pub path: PathBuf,
}

/// An installed shared framework (`Microsoft.NETCore.App`, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameworkEntry {
    pub name: String,
    pub version: String,
    pub path: PathBuf,
}

/// Everything one enumeration call reported, in the host's order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentBatch {
    pub hostfxr_version: Option<String>,
    pub hostfxr_commit_hash: Option<String>,
    pub sdks: Vec<SdkEntry>,
    pub frameworks: Vec<FrameworkEntry>,
}

impl EnvironmentBatch {
    /// Copy a raw descriptor into owned Rust values. Returns `None` for a null
    /// descriptor; null strings decode as empty.
    ///
    /// # Safety
    ///
    /// `info` must be null or point to a valid descriptor whose arrays hold at
    /// least the advertised number of entries, for the duration of the call.
    pub unsafe fn from_raw(info: *const EnvironmentInfo) -> Option<Self> {
        let info = info.as_ref()?;

        let sdks = raw_slice(info.sdks, info.sdk_count)
            .iter()
            .map(|sdk: &SdkInfo| SdkEntry {
                version: platform_string(sdk.version).unwrap_or_default(),
                path: PathBuf::from(platform_string(sdk.path).unwrap_or_default()),
            })
            .collect();

        let frameworks = raw_slice(info.frameworks, info.framework_count)
            .iter()
            .map(|framework: &FrameworkInfo| FrameworkEntry {
                name: platform_string(framework.name).unwrap_or_default(),
                version: platform_string(framework.version).unwrap_or_default(),
                path: PathBuf::from(platform_string(framework.path).unwrap_or_default()),
            })
            .collect();

        Some(Self {
            hostfxr_version: platform_string(info.hostfxr_version),
            hostfxr_commit_hash: platform_string(info.hostfxr_commit_hash),
            sdks,
            frameworks,
        })
    }
}

unsafe fn raw_slice<'a, T>(ptr: *const T, count: usize) -> &'a [T] {
    if ptr.is_null() || count == 0 {
        &[]
    } else {
        slice::from_raw_parts(ptr, count)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ffi::CharT;
    use std::mem::size_of;
    use std::ptr;

    /// Nul terminated platform string for building raw descriptors
    pub(crate) fn platform(s: &str) -> Vec<CharT> {
        #[cfg(windows)]
        {
            s.encode_utf16().chain(std::iter::once(0)).collect()
        }
        #[cfg(not(windows))]
        {
            s.bytes().map(|b| b as CharT).chain(std::iter::once(0)).collect()
        }
    }

    #[test]
    fn test_from_raw_null_descriptor() {
        assert!(unsafe { EnvironmentBatch::from_raw(ptr::null()) }.is_none());
    }

    #[test]
    fn test_from_raw_copies_entries_in_order() {
        let hostfxr_version = platform("8.0.11");
        let sdk_versions = [platform("6.0.100"), platform("8.0.404")];
        let sdk_path = platform("/usr/share/dotnet/sdk");
        let fx_name = platform("Microsoft.NETCore.App");
        let fx_version = platform("8.0.11");
        let fx_path = platform("/usr/share/dotnet/shared/Microsoft.NETCore.App");

        let sdks: Vec<SdkInfo> = sdk_versions
            .iter()
            .map(|version| SdkInfo {
                size: size_of::<SdkInfo>(),
                version: version.as_ptr(),
                path: sdk_path.as_ptr(),
            })
            .collect();
        let frameworks = [FrameworkInfo {
            size: size_of::<FrameworkInfo>(),
            name: fx_name.as_ptr(),
            version: fx_version.as_ptr(),
            path: fx_path.as_ptr(),
        }];
        let info = EnvironmentInfo {
            size: size_of::<EnvironmentInfo>(),
            hostfxr_version: hostfxr_version.as_ptr(),
            hostfxr_commit_hash: ptr::null(),
            sdk_count: sdks.len(),
            sdks: sdks.as_ptr(),
            framework_count: frameworks.len(),
            frameworks: frameworks.as_ptr(),
        };

        let batch = unsafe { EnvironmentBatch::from_raw(&info) }.unwrap();

        assert_eq!(batch.hostfxr_version.as_deref(), Some("8.0.11"));
        assert_eq!(batch.hostfxr_commit_hash, None);
        assert_eq!(
            batch.sdks.iter().map(|s| s.version.as_str()).collect::<Vec<_>>(),
            vec!["6.0.100", "8.0.404"]
        );
        assert_eq!(batch.sdks[0].path, PathBuf::from("/usr/share/dotnet/sdk"));
        assert_eq!(batch.frameworks.len(), 1);
        assert_eq!(batch.frameworks[0].name, "Microsoft.NETCore.App");
        assert_eq!(batch.frameworks[0].version, "8.0.11");
    }

    #[test]
    fn test_from_raw_tolerates_null_arrays_and_strings() {
        let sdks = [SdkInfo {
            size: size_of::<SdkInfo>(),
            version: ptr::null(),
            path: ptr::null(),
        }];
        let info = EnvironmentInfo {
            size: size_of::<EnvironmentInfo>(),
            hostfxr_version: ptr::null(),
            hostfxr_commit_hash: ptr::null(),
            sdk_count: 1,
            sdks: sdks.as_ptr(),
            framework_count: 3,
            frameworks: ptr::null(),
        };

        let batch = unsafe { EnvironmentBatch::from_raw(&info) }.unwrap();

        assert_eq!(batch.sdks, vec![SdkEntry::default()]);
        assert!(batch.frameworks.is_empty());
    }
}

//! Loading failures against real files on disk

use netcoresearch_hostfxr::{HostFxr, LoaderError};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_missing_library() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(HostFxr::library_file_name());

    match HostFxr::load(&path) {
        Err(LoaderError::LoadFailed { path: failed, .. }) => assert_eq!(failed, path),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("loading a missing library should fail"),
    }
}

#[test]
fn test_load_file_that_is_not_a_library() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"definitely not a shared object").unwrap();
    file.flush().unwrap();

    let err = HostFxr::load(file.path()).err().expect("garbage should not load");
    assert!(matches!(err, LoaderError::LoadFailed { .. }));
    assert!(err.to_string().starts_with("Failed to load library "));
}

#[test]
fn test_library_is_located_next_to_the_executable() {
    let located = HostFxr::locate_beside_executable().unwrap();
    let exe = std::env::current_exe().unwrap();

    assert_eq!(located.parent(), exe.parent());
    assert_eq!(located.file_name(), Some(HostFxr::library_file_name().as_os_str()));
}

#[test]
fn test_library_file_name_is_platform_specific() {
    let name = HostFxr::library_file_name();
    let name = name.to_string_lossy();

    if cfg!(windows) {
        assert_eq!(name, "hostfxr.dll");
    } else if cfg!(target_os = "macos") {
        assert_eq!(name, "libhostfxr.dylib");
    } else {
        assert_eq!(name, "libhostfxr.so");
    }
}

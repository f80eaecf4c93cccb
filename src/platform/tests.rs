// menphina: FFXIV Mod Configuration Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 Isaki
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the platform abstraction and host bridge.

use std::io::Write as _;
use std::path::Path;

use crate::error::{PathError, PlatformError};

use super::detect::{Platform, classify_version_banner, current_platform, read_version_banner};
use super::pathconv::{to_compat_path, to_windows_path};

// =============================================================================
// Platform detection
// =============================================================================

#[test]
fn test_classify_wsl_banner() {
    let banner =
        "Linux version 5.15.167.4-microsoft-standard-WSL2 (root@f9c826d3017f) (gcc ...)\n";
    assert_eq!(classify_version_banner(banner), Platform::Wsl);
}

#[test]
fn test_classify_native_linux_banner() {
    let banner = "Linux version 6.8.0-47-generic (buildd@lcy02-amd64-045) (gcc ...)\n";
    assert_eq!(classify_version_banner(banner), Platform::Linux);
}

#[test]
fn test_classify_marker_is_case_sensitive() {
    let banner = "Linux version 4.4.0 Microsoft something\n";
    assert_eq!(classify_version_banner(banner), Platform::Linux);
}

#[test]
fn test_read_version_banner_missing_file() {
    let err = read_version_banner(Path::new("/nonexistent/menphina-version")).unwrap_err();
    assert!(matches!(err, PlatformError::VersionRead { .. }));
}

#[test]
fn test_read_version_banner_empty_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"\n").unwrap();
    let err = read_version_banner(file.path()).unwrap_err();
    assert!(matches!(err, PlatformError::VersionEmpty(_)));
}

#[test]
fn test_read_version_banner_content() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"Linux version 6.8.0 test\n").unwrap();
    let banner = read_version_banner(file.path()).unwrap();
    assert_eq!(classify_version_banner(&banner), Platform::Linux);
}

#[test]
fn test_current_platform_is_memoized() {
    let first = current_platform().unwrap();
    let second = current_platform().unwrap();
    assert_eq!(first, second);
}

// =============================================================================
// Path form conversion
// =============================================================================

#[test]
fn test_to_windows_path() {
    insta::assert_snapshot!(to_windows_path("/mnt/c/Users/Test").unwrap(), @r"C:\Users\Test");
}

#[test]
fn test_to_windows_path_drive_only() {
    insta::assert_snapshot!(to_windows_path("/mnt/c").unwrap(), @"C:");
}

#[test]
fn test_to_windows_path_uppercases_drive() {
    insta::assert_snapshot!(to_windows_path("/mnt/d/games").unwrap(), @r"D:\games");
}

#[test]
fn test_to_compat_path() {
    insta::assert_snapshot!(to_compat_path("C:\\Users\\Test").unwrap(), @"/mnt/c/Users/Test");
}

#[test]
fn test_to_compat_path_lowercases_drive() {
    insta::assert_snapshot!(to_compat_path("D:\\Games\\FFXIV").unwrap(), @"/mnt/d/Games/FFXIV");
}

#[test]
fn test_round_trip_compat_paths() {
    for p in [
        "/mnt/c/Users/Test",
        "/mnt/d/Games/FFXIV/game",
        "/mnt/e/a b/c",
        "/mnt/c/",
    ] {
        let windows = to_windows_path(p).unwrap();
        assert_eq!(to_compat_path(&windows).unwrap(), p, "round trip of {p}");
    }
}

#[test]
fn test_round_trip_windows_paths() {
    for p in ["C:\\Users\\Test", "D:\\Games\\FFXIV\\game", "E:\\a b\\c"] {
        let compat = to_compat_path(p).unwrap();
        assert_eq!(to_windows_path(&compat).unwrap(), p, "round trip of {p}");
    }
}

#[test]
fn test_to_windows_path_rejects_short_input() {
    for p in ["", "/", "/mnt", "/mnt/"] {
        let err = to_windows_path(p).unwrap_err();
        assert!(matches!(err, PathError::NotCompatForm { .. }), "input {p:?}");
    }
}

#[test]
fn test_to_windows_path_rejects_wrong_prefix() {
    let err = to_windows_path("/media/c/Users").unwrap_err();
    assert!(matches!(err, PathError::NotCompatForm { .. }));
}

#[test]
fn test_to_windows_path_rejects_bad_drive() {
    // Non-alphabetic drive and multi-character drive segment.
    for p in ["/mnt/1/Users", "/mnt/cd/Users"] {
        let err = to_windows_path(p).unwrap_err();
        assert!(matches!(err, PathError::NotCompatForm { .. }), "input {p:?}");
    }
}

#[test]
fn test_to_compat_path_rejects_short_input() {
    for p in ["", "C", "C:"] {
        let err = to_compat_path(p).unwrap_err();
        assert!(matches!(err, PathError::NotWindowsForm { .. }), "input {p:?}");
    }
}

#[test]
fn test_to_compat_path_rejects_bad_drive() {
    for p in ["1:\\Users", "CX\\Users", "\\\\server\\share"] {
        let err = to_compat_path(p).unwrap_err();
        assert!(matches!(err, PathError::NotWindowsForm { .. }), "input {p:?}");
    }
}

// =============================================================================
// Subprocess pipe channel
// =============================================================================

#[cfg(unix)]
mod channel {
    use crate::error::ProcessError;
    use crate::platform::winenv::run_capture;
    use std::process::Command;

    fn sh(script: &str) -> Command {
        let mut cmd = Command::new("/bin/sh");
        cmd.args(["-c", script]);
        cmd
    }

    #[test]
    fn test_captures_line_terminated_output() {
        let bytes = run_capture(&mut sh("printf 'hello\\n'"), 4096).unwrap();
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn test_strips_crlf_terminator() {
        let bytes = run_capture(&mut sh("printf 'C:\\\\Users\\\\Test\\r\\n'"), 4096).unwrap();
        assert_eq!(bytes, b"C:\\Users\\Test");
    }

    #[test]
    fn test_zero_byte_child_is_insufficient_output() {
        let err = run_capture(&mut sh("exit 0"), 4096).unwrap_err();
        assert!(matches!(err, ProcessError::InsufficientOutput { got: 0 }));
    }

    #[test]
    fn test_single_byte_child_is_insufficient_output() {
        let err = run_capture(&mut sh("printf 'x'"), 4096).unwrap_err();
        assert!(matches!(err, ProcessError::InsufficientOutput { got: 1 }));
    }

    #[test]
    fn test_lone_newline_is_shorter_than_crlf_terminator() {
        // The guard is fixed at the CRLF width the echoed command emits; a
        // bare LF with nothing before it does not clear it.
        let err = run_capture(&mut sh("printf '\\n'"), 4096).unwrap_err();
        assert!(matches!(err, ProcessError::InsufficientOutput { got: 1 }));
    }

    #[test]
    fn test_spawn_failure_names_the_program() {
        let mut cmd = Command::new("/nonexistent/menphina-test-binary");
        let err = run_capture(&mut cmd, 4096).unwrap_err();
        assert!(
            err.to_string()
                .contains("/nonexistent/menphina-test-binary")
        );
    }

    #[test]
    fn test_over_budget_child_is_stream_overflow() {
        // The child writes well past the budget; the parent must drain the
        // stream and still reap the child before reporting.
        let err = run_capture(&mut sh("head -c 9000 /dev/zero"), 64).unwrap_err();
        assert!(matches!(err, ProcessError::StreamOverflow { limit: 64 }));
    }

    #[test]
    fn test_nonzero_exit_wins_over_captured_output() {
        let err = run_capture(&mut sh("printf 'out\\n'; exit 3"), 4096).unwrap_err();
        assert!(matches!(err, ProcessError::ExecutionFailed { .. }));
    }

    #[test]
    fn test_spawn_failure() {
        let mut cmd = Command::new("/nonexistent/menphina-test-binary");
        let err = run_capture(&mut cmd, 4096).unwrap_err();
        assert!(matches!(err, ProcessError::SpawnFailed { .. }));
    }
}

// =============================================================================
// Home resolution
// =============================================================================

#[test]
fn test_native_home_matches_environment() {
    // Only meaningful on a native platform where HOME comes straight from the
    // process environment.
    let platform = current_platform().unwrap();
    if matches!(platform, Platform::Linux | Platform::Darwin)
        && let Ok(expected) = std::env::var("HOME")
    {
        let first = super::home::user_home_directory().unwrap();
        let second = super::home::user_home_directory().unwrap();
        assert_eq!(first, expected);
        assert_eq!(first, second, "home must be memoized");
    }
}

#[test]
fn test_launcher_config_dir_is_platform_fixed() {
    let suffix = super::home::relative_launcher_config_dir().unwrap();
    assert!(!suffix.is_empty());
    let again = super::home::relative_launcher_config_dir().unwrap();
    assert_eq!(suffix, again);
}

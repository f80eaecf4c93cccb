// menphina: FFXIV Mod Configuration Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 Isaki
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, MenphinaError, MenphinaResult, PathError, PlatformError};

#[test]
fn test_platform_error_display() {
    let err = PlatformError::EnvVarMissing("HOME".to_string());
    insta::assert_snapshot!(err.to_string(), @"unable to read env HOME");
}

#[test]
fn test_path_error_display() {
    let err = PathError::NotCompatForm {
        path: "/tmp/x".to_string(),
        reason: "missing mount prefix",
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"not a valid compatibility-layer path '/tmp/x': missing mount prefix"
    );
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::ReadError {
        path: "/home/user/.menphina.json".to_string(),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"failed to open file for read: /home/user/.menphina.json: entity not found"
    );
}

#[test]
fn test_menphina_error_size() {
    // Box<str> variants (Other) are 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<MenphinaError>();
    assert!(size <= 24, "MenphinaError is {size} bytes, expected <= 24");
}

#[test]
fn test_menphina_result_size() {
    let size = std::mem::size_of::<MenphinaResult<()>>();
    assert!(size <= 24, "MenphinaResult<()> is {size} bytes, expected <= 24");
}

#[test]
fn test_boxing_from_sub_error() {
    let err: MenphinaError = PlatformError::VersionEmpty("/proc/version".to_string()).into();
    insta::assert_snapshot!(
        err.to_string(),
        @"platform error: '/proc/version' yielded no readable content"
    );
}

// menphina: FFXIV Mod Configuration Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 Isaki
// SPDX-License-Identifier: GPL-3.0-or-later

use super::create_config::run_create_config_command;
use super::{run_clean_command, run_deploy_command, run_package_command};
use crate::config::{AppConfig, read_json_file};

#[test]
fn test_create_config_writes_readable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".menphina.json");
    let path = path.to_string_lossy();

    run_create_config_command(&path).unwrap();

    // Whatever was (or was not) located, the file must exist and parse, and
    // any non-empty field must point at something real.
    let config: AppConfig = read_json_file(&path).unwrap();
    for field in [&config.penumbra_dir, &config.xiv_launcher_config_dir] {
        assert!(
            field.is_empty() || std::path::Path::new(field).exists(),
            "fabricated path: {field}"
        );
    }
}

#[test]
fn test_create_config_rejects_unwritable_target() {
    let err = run_create_config_command("/nonexistent/dir/.menphina.json").unwrap_err();
    assert!(
        err.to_string().contains("failed to open file for write"),
        "unexpected error: {err}"
    );
}

#[test]
fn test_unimplemented_workflows_report_errors() {
    let config = AppConfig::default();
    assert!(run_clean_command(&config).is_err());
    assert!(run_package_command(&config).is_err());
    assert!(run_deploy_command(&config).is_err());
}

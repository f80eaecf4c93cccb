// menphina: FFXIV Mod Configuration Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 Isaki
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing and the binary's exit behavior.

use clap::Parser;
use menphina::cli::{Cli, Command};
use std::process::Command as ProcessCommand;

// =============================================================================
// Argument parsing
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["menphina", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["menphina", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_all_modes_parse() {
    for (mode, expect_some) in [
        ("create-config", true),
        ("clean", true),
        ("package", true),
        ("deploy", true),
    ] {
        let cli = Cli::try_parse_from(["menphina", mode]).unwrap();
        assert_eq!(cli.command.is_some(), expect_some, "mode {mode}");
    }
}

#[test]
fn cli_global_options_before_mode() {
    let cli = Cli::try_parse_from([
        "menphina",
        "-l",
        "4",
        "--file-log-level",
        "5",
        "--log-file",
        "/tmp/m.log",
        "package",
    ])
    .unwrap();
    assert_eq!(cli.global.log_level, Some(4));
    assert_eq!(cli.global.file_log_level, Some(5));
    assert!(matches!(cli.command, Some(Command::Package)));
}

// =============================================================================
// Binary exit behavior
// =============================================================================

#[test]
fn binary_version_exits_zero() {
    let output = ProcessCommand::new(env!("CARGO_BIN_EXE_menphina"))
        .arg("version")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn binary_no_mode_exits_nonzero() {
    let output = ProcessCommand::new(env!("CARGO_BIN_EXE_menphina"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("No operating mode specified"));
}

#[test]
fn binary_unimplemented_mode_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join(".menphina.json");
    std::fs::write(
        &config_path,
        r#"{"penumbraDir": "", "xivLauncherConfigDir": ""}"#,
    )
    .unwrap();

    let output = ProcessCommand::new(env!("CARGO_BIN_EXE_menphina"))
        .args(["-c", &config_path.to_string_lossy(), "clean"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("not implemented"));
}

// menphina: FFXIV Mod Configuration Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 Isaki
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   CreateConfig | Clean | Package | Deploy | Version
//! ```

use std::process::ExitCode;

use menphina::cli::global::GlobalOptions;
use menphina::cli::{self, Command};
use menphina::cmd::create_config::run_create_config_command;
use menphina::cmd::{run_clean_command, run_deploy_command, run_package_command};
use menphina::config::{AppConfig, config_file_path, read_json_file};
use menphina::error::Result;
use menphina::logging::{LogConfig, LogLevel, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::CreateConfig) => {
            resolve_config_path(&cli.global).and_then(|path| run_create_config_command(&path))
        }
        Some(Command::Clean) => load_config(&cli.global).and_then(|c| run_clean_command(&c)),
        Some(Command::Package) => load_config(&cli.global).and_then(|c| run_package_command(&c)),
        Some(Command::Deploy) => load_config(&cli.global).and_then(|c| run_deploy_command(&c)),
        None => {
            eprintln!("No operating mode specified; please run with --help");
            Err(anyhow::anyhow!("no operating mode specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn resolve_config_path(global: &GlobalOptions) -> Result<String> {
    global.config.as_ref().map_or_else(config_file_path, |p| {
        Ok(p.display().to_string())
    })
}

fn load_config(global: &GlobalOptions) -> Result<AppConfig> {
    let path = resolve_config_path(global)?;
    Ok(read_json_file(&path)?)
}

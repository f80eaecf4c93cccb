// menphina: FFXIV Mod Configuration Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 Isaki
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for menphina using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! menphina [global options] <command>
//! create-config
//! clean
//! package
//! deploy
//! version
//! ```

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// FFXIV Mod Configuration Manager - Rust Port
#[derive(Debug, Parser)]
#[command(
    name = "menphina",
    author,
    version,
    about = "FFXIV Mod Configuration Manager",
    long_about = "menphina Copyright (C) 2026 Isaki\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Manages FFXIV mod-manager configuration (Penumbra, Mare\n\
                  Synchronos) across hosts, including WSL installs whose\n\
                  launcher state lives on the Windows side.",
    after_help = "CONFIG FILE:\n\n\
                  By default, menphina reads and writes `.menphina.json` in the\n\
                  user's home directory. Under WSL the home directory is the\n\
                  Windows profile reached through /mnt, resolved by querying the\n\
                  host. Use --config to point at a different file."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Locates the launcher and mod-manager directories and writes
    /// `.menphina.json`.
    #[command(name = "create-config")]
    CreateConfig,

    /// Analyzes and cleans orphaned data from the Penumbra configuration
    /// directory.
    Clean,

    /// Packages all configured mod data into a deployment package (xmpkg).
    Package,

    /// Deploys all configured mod data from a deployment package.
    Deploy,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}

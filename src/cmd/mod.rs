// menphina: FFXIV Mod Configuration Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 Isaki
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   create-config   implemented
//!   clean, package, deploy   planned workflows, reported as unimplemented
//! ```

pub mod create_config;

#[cfg(test)]
mod tests;

use crate::config::AppConfig;
use crate::error::Result;

/// Handler for the clean command.
///
/// # Errors
///
/// Always: the mod-cleaning workflow is not implemented yet.
pub fn run_clean_command(_config: &AppConfig) -> Result<()> {
    anyhow::bail!("the clean command is not implemented yet")
}

/// Handler for the package command.
///
/// # Errors
///
/// Always: the packaging workflow is not implemented yet.
pub fn run_package_command(_config: &AppConfig) -> Result<()> {
    anyhow::bail!("the package command is not implemented yet")
}

/// Handler for the deploy command.
///
/// # Errors
///
/// Always: the deployment workflow is not implemented yet.
pub fn run_deploy_command(_config: &AppConfig) -> Result<()> {
    anyhow::bail!("the deploy command is not implemented yet")
}

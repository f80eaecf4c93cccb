// menphina: FFXIV Mod Configuration Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 Isaki
// SPDX-License-Identifier: GPL-3.0-or-later

//! Home directory and launcher configuration directory resolution.

use std::sync::OnceLock;

use tracing::debug;

use crate::error::{PlatformError, Result};

use super::detect::{Platform, current_platform};
use super::{pathconv, winenv};

// Documentation for getpwnam/getpwuid says to use HOME, so we use that.
#[cfg(windows)]
const HOME_VAR_NAME: &str = "USERPROFILE";
#[cfg(not(windows))]
const HOME_VAR_NAME: &str = "HOME";

/// Variable holding the Windows-side profile directory, resolved on the host
/// when running under the compatibility layer.
const WSL_HOME_VAR_NAME: &str = "USERPROFILE";

static HOME: OnceLock<String> = OnceLock::new();

/// Returns the user's home directory, memoized for the process lifetime.
///
/// Under WSL the profile lives on the Windows side; it is fetched from the
/// host and rewritten into the `/mnt` namespace this process actually sees.
///
/// # Errors
///
/// Fails if platform detection fails, if the host query fails under WSL, or
/// if the home environment variable is absent on native platforms. There is
/// no fallback value; a silently wrong home directory is worse than failing.
pub fn user_home_directory() -> Result<String> {
    if let Some(home) = HOME.get() {
        return Ok(home.clone());
    }
    let resolved = resolve_home()?;
    Ok(HOME.get_or_init(|| resolved).clone())
}

fn resolve_home() -> Result<String> {
    if current_platform()? == Platform::Wsl {
        let windows_home = winenv::resolve_host_env(WSL_HOME_VAR_NAME)?;
        let home = pathconv::to_compat_path(&windows_home)?;
        debug!(home = %home, "resolved host profile");
        return Ok(home);
    }

    std::env::var(HOME_VAR_NAME)
        .map_err(|_| PlatformError::EnvVarMissing(HOME_VAR_NAME.to_string()).into())
}

/// Returns the launcher's configuration directory relative to the home
/// directory.
///
/// Under WSL the launcher's data lives under the Windows-side profile tree,
/// so the suffix differs from a native Linux install.
///
/// # Errors
///
/// Fails only if platform detection fails.
pub fn relative_launcher_config_dir() -> Result<&'static str> {
    Ok(match current_platform()? {
        Platform::Windows => "AppData\\Roaming\\XIVLauncher",
        Platform::Wsl => "AppData/Roaming/XIVLauncher",
        Platform::Linux => ".xlcore",
        Platform::Darwin => "Library/Application Support/XIV on Mac",
    })
}

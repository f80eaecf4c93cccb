// menphina: FFXIV Mod Configuration Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 Isaki
// SPDX-License-Identifier: GPL-3.0-or-later

//! Create-config command implementation.
//!
//! Locates the XIVLauncher configuration directory and the Penumbra plugin
//! directory under the resolved home, then writes `.menphina.json`. Anything
//! that cannot be located is left as an empty string for the user to fill in;
//! guessing a wrong path would be worse.

use tracing::{debug, warn};

use crate::config::{AppConfig, write_json_file};
use crate::error::Result;
use crate::platform::{relative_launcher_config_dir, user_home_directory};
use crate::utility::fs::{path_exists, path_join};

/// Penumbra's plugin configuration tree inside the launcher directory.
const PENUMBRA_PLUGIN_DIR: &str = "pluginConfigs/Penumbra";

/// Main handler for the create-config command.
///
/// # Errors
///
/// Returns an error if home resolution fails or the config file cannot be
/// written. Missing launcher or Penumbra directories are not errors.
pub fn run_create_config_command(config_path: &str) -> Result<()> {
    let home = user_home_directory()?;
    debug!(home = %home, "resolved home directory");

    let launcher_dir = locate_launcher_dir(&home)?;
    let penumbra_dir = locate_penumbra_dir(&launcher_dir);

    let config = AppConfig {
        penumbra_dir,
        xiv_launcher_config_dir: launcher_dir,
    };

    write_json_file(&config, config_path)?;
    println!("Wrote {config_path}:{config}");
    Ok(())
}

fn locate_launcher_dir(home: &str) -> Result<String> {
    let candidate = path_join(home, relative_launcher_config_dir()?);
    if path_exists(&candidate) {
        Ok(candidate)
    } else {
        warn!(candidate = %candidate, "launcher config directory not found");
        Ok(String::new())
    }
}

fn locate_penumbra_dir(launcher_dir: &str) -> String {
    if launcher_dir.is_empty() {
        return String::new();
    }
    let candidate = path_join(launcher_dir, PENUMBRA_PLUGIN_DIR);
    if path_exists(&candidate) {
        candidate
    } else {
        warn!(candidate = %candidate, "penumbra plugin directory not found");
        String::new()
    }
}

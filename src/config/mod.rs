// menphina: FFXIV Mod Configuration Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 Isaki
// SPDX-License-Identifier: GPL-3.0-or-later

//! Application configuration (`.menphina.json`).
//!
//! ```text
//! config_file_path() = <home>/.menphina.json
//!
//! {
//!   "penumbraDir": "...",
//!   "xivLauncherConfigDir": "..."
//! }
//! ```
//!
//! JSON field names keep the original camelCase so existing config files stay
//! readable by both implementations.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::platform::user_home_directory;
use crate::utility::fs::path_join;


/// Name of the configuration file in the user's home directory.
pub const CONFIG_FILE_NAME: &str = ".menphina.json";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Penumbra plugin configuration directory.
    pub penumbra_dir: String,
    /// XIVLauncher configuration directory.
    pub xiv_launcher_config_dir: String,
}

impl fmt::Display for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "- penumbraDir: {}", self.penumbra_dir)?;
        writeln!(f, "- xivLauncherConfigDir: {}", self.xiv_launcher_config_dir)
    }
}

/// Returns the absolute path of the configuration file.
///
/// # Errors
///
/// Fails if the home directory cannot be resolved.
pub fn config_file_path() -> Result<String> {
    let home = user_home_directory()?;
    Ok(path_join(&home, CONFIG_FILE_NAME))
}

/// Reads and deserializes a JSON file.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] if the file cannot be opened and
/// [`ConfigError::ParseError`] if its content is not valid JSON for `T`.
pub fn read_json_file<T: DeserializeOwned>(path: &str) -> std::result::Result<T, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_string(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.to_string(),
        message: e.to_string(),
    })
}

/// Serializes `value` as pretty JSON and writes it to `path`.
///
/// # Errors
///
/// Returns [`ConfigError::SerializeError`] if serialization fails and
/// [`ConfigError::WriteError`] if the file cannot be written.
pub fn write_json_file<T: Serialize>(value: &T, path: &str) -> std::result::Result<(), ConfigError> {
    let content =
        serde_json::to_string_pretty(value).map_err(|e| ConfigError::SerializeError {
            path: path.to_string(),
            message: e.to_string(),
        })?;

    std::fs::write(path, content).map_err(|source| ConfigError::WriteError {
        path: path.to_string(),
        source,
    })
}

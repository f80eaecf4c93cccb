// menphina: FFXIV Mod Configuration Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 Isaki
// SPDX-License-Identifier: GPL-3.0-or-later

//! Platform detection.
//!
//! On Linux kernels the only reliable way to tell WSL apart from a native
//! install is the kernel version banner, which carries a vendor marker on WSL.
//! macOS and Windows are decided at compile time.

use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::PlatformError;

/// The kernel version banner inspected on Linux-family kernels.
pub const PROC_VERSION_PATH: &str = "/proc/version";

/// Case-sensitive marker present in WSL kernel banners.
const WSL_VERSION_MARKER: &str = "microsoft";

/// The concrete operating environment this process runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Darwin,
    Windows,
    Linux,
    /// Linux compatibility layer atop Windows.
    Wsl,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Darwin => "darwin",
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::Wsl => "wsl",
        };
        f.write_str(name)
    }
}

static CURRENT: OnceLock<Platform> = OnceLock::new();

/// Returns the platform this process runs under.
///
/// Detected once per process and memoized; the host cannot change mid-run.
///
/// # Errors
///
/// Returns a [`PlatformError`] if the kernel version banner cannot be read or
/// is empty. Platform identity is a precondition for path resolution, so this
/// is never defaulted.
pub fn current_platform() -> std::result::Result<Platform, PlatformError> {
    if let Some(platform) = CURRENT.get() {
        return Ok(*platform);
    }
    let detected = detect()?;
    Ok(*CURRENT.get_or_init(|| detected))
}

#[cfg(target_os = "linux")]
fn detect() -> std::result::Result<Platform, PlatformError> {
    let banner = read_version_banner(Path::new(PROC_VERSION_PATH))?;
    Ok(classify_version_banner(&banner))
}

#[cfg(target_os = "macos")]
fn detect() -> std::result::Result<Platform, PlatformError> {
    Ok(Platform::Darwin)
}

#[cfg(windows)]
fn detect() -> std::result::Result<Platform, PlatformError> {
    Ok(Platform::Windows)
}

/// Reads the kernel version banner from `path`.
pub(crate) fn read_version_banner(path: &Path) -> std::result::Result<String, PlatformError> {
    let content = std::fs::read_to_string(path).map_err(|source| PlatformError::VersionRead {
        path: path.display().to_string(),
        source,
    })?;

    if content.trim().is_empty() {
        return Err(PlatformError::VersionEmpty(path.display().to_string()));
    }

    Ok(content)
}

/// Classifies a kernel version banner as WSL or native Linux.
#[must_use]
pub fn classify_version_banner(banner: &str) -> Platform {
    if banner.contains(WSL_VERSION_MARKER) {
        Platform::Wsl
    } else {
        Platform::Linux
    }
}

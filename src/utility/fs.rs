// menphina: FFXIV Mod Configuration Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 Isaki
// SPDX-License-Identifier: GPL-3.0-or-later

//! Thin path helpers exposed to the command layer.
//!
//! Paths are carried as `String` throughout the tool because they cross the
//! host boundary as text (environment variable values, JSON fields).

use std::path::{Path, PathBuf};

/// Joins `b` onto `a` with the platform separator.
#[must_use]
pub fn path_join(a: &str, b: &str) -> String {
    let mut joined = PathBuf::from(a);
    joined.push(b);
    joined.to_string_lossy().into_owned()
}

/// Returns the final component of a path, or the empty string if it has none.
#[must_use]
pub fn path_basename(pathstr: &str) -> String {
    Path::new(pathstr)
        .file_name()
        .map_or_else(String::new, |name| name.to_string_lossy().into_owned())
}

/// Returns whether `pathstr` exists on the filesystem.
#[must_use]
pub fn path_exists(pathstr: &str) -> bool {
    Path::new(pathstr).exists()
}

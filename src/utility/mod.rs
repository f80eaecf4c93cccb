// menphina: FFXIV Mod Configuration Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 Isaki
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility functions and helpers.
//!
//! ```text
//! fs:  path_join()      std::path join, returned as String
//!      path_basename()  final component, empty for paths without one
//!      path_exists()    existence probe
//! ```

pub mod fs;

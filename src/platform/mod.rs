// menphina: FFXIV Mod Configuration Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 Isaki
// SPDX-License-Identifier: GPL-3.0-or-later

//! Platform abstraction and Windows-host bridge.
//!
//! ```text
//! home::user_home_directory()
//!            |
//!            v
//! detect::current_platform()  (memoized, /proc/version probe)
//!            |
//!      Wsl?  |  native
//!       v    v
//! winenv::resolve_host_env("USERPROFILE")     std::env::var
//!       |
//!       v
//! cmd.exe /C echo %VAR%  --> pipe --> bytes
//!       |
//!       v
//! pathconv::to_compat_path()   C:\Users\X  <->  /mnt/c/Users/X
//! ```
//!
//! Everything here is synchronous and blocking; one short-lived child process
//! per host-environment query, no state shared across calls beyond the two
//! write-once memoized values.

pub mod detect;
pub mod home;
pub mod pathconv;
pub mod winenv;

#[cfg(test)]
mod tests;

pub use detect::{Platform, current_platform};
pub use home::{relative_launcher_config_dir, user_home_directory};
pub use pathconv::{to_compat_path, to_windows_path};
pub use winenv::resolve_host_env;

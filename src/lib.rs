// menphina: FFXIV Mod Configuration Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 Isaki
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |        create-config / clean /
//!                |          package / deploy
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  .menphina.json (serde)   |
//!              '-------------+-------------'
//!                            |
//!                            v
//!   +-----------------------------------------------+
//!   |  platform   detect, pathconv, winenv, home    |
//!   +-----------------------------------------------+
//!   |  foundation   error, logging, utility         |
//!   +-----------------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod logging;
pub mod platform;
pub mod utility;

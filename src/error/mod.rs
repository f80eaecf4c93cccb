// menphina: FFXIV Mod Configuration Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 Isaki
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            MenphinaError
//!                  |
//!     +--------+---+----+--------+
//!     |        |        |        |
//!     v        v        v        v
//! Platform   Path    Process   Config   Io/Other
//!   Box       Box      Box       Box    Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Platform  VersionRead, VersionEmpty, EnvVarMissing
//!   Path      NotCompatForm, NotWindowsForm
//!   Process   SpawnFailed, StreamOverflow, InsufficientOutput,
//!             ExecutionFailed, ...
//!   Config    ReadError, WriteError, ParseError, SerializeError
//!
//! All variants boxed => MenphinaError stays small on the stack.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`MenphinaError`].
pub type MenphinaResult<T> = std::result::Result<T, MenphinaError>;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum MenphinaError {
    /// Platform detection or host-environment error.
    #[error("platform error: {0}")]
    Platform(#[from] Box<PlatformError>),

    /// Path form conversion error.
    #[error("path error: {0}")]
    Path(#[from] Box<PathError>),

    /// Subprocess execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Configuration file error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for MenphinaError {
                fn from(err: $error) -> Self {
                    MenphinaError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    PlatformError => Platform,
    PathError => Path,
    ProcessError => Process,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Platform Errors ---

/// Platform detection and environment lookup errors.
///
/// Platform identity is a precondition for nearly everything else, so none of
/// these are recoverable by defaulting.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The kernel version banner could not be read.
    #[error("failed to read '{path}': {source}")]
    VersionRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The kernel version banner was empty.
    #[error("'{0}' yielded no readable content")]
    VersionEmpty(String),

    /// A required environment variable is not set in the current process.
    #[error("unable to read env {0}")]
    EnvVarMissing(String),
}

// --- Path Errors ---

/// Path form conversion errors.
///
/// Conversion is total over the validated grammar; anything outside it is
/// rejected outright rather than converted best-effort.
#[derive(Debug, Error)]
pub enum PathError {
    /// Input does not match the `/mnt/<drive>/...` grammar.
    #[error("not a valid compatibility-layer path '{path}': {reason}")]
    NotCompatForm { path: String, reason: &'static str },

    /// Input does not match the `<letter>:...` grammar.
    #[error("not a valid windows path '{path}': {reason}")]
    NotWindowsForm { path: String, reason: &'static str },
}

// --- Process Errors ---

/// Errors from the one fixed subprocess used to query the Windows host.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Failed to spawn the child (covers pipe creation and fork/exec).
    #[error("failed to spawn '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The child's stdout handle was not available after spawn.
    #[error("stdout pipe unavailable for '{command}'")]
    PipeUnavailable { command: String },

    /// Reading from the pipe failed.
    #[error("failed to read child output: {0}")]
    ReadFailed(#[source] std::io::Error),

    /// The child produced more output than the fixed byte budget.
    #[error("child output exceeded {limit} bytes")]
    StreamOverflow { limit: usize },

    /// The child produced less output than a trailing line terminator.
    #[error("child produced insufficient output ({got} bytes)")]
    InsufficientOutput { got: usize },

    /// Waiting for the child's termination failed.
    #[error("failed to wait for child: {0}")]
    WaitFailed(#[source] std::io::Error),

    /// The child exited with a non-zero status.
    #[error("'{command}' exited with status {status}")]
    ExecutionFailed { command: String, status: String },

    /// The captured byte stream was not well-formed UTF-8.
    #[error("child output is not valid utf-8")]
    OutputNotUtf8,
}

// --- Config Errors ---

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to open a configuration file for read.
    #[error("failed to open file for read: {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to open a configuration file for write.
    #[error("failed to open file for write: {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a configuration file.
    #[error("failed to parse '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Failed to serialize a configuration value.
    #[error("failed to serialize '{path}': {message}")]
    SerializeError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

#[cfg(test)]
mod tests;

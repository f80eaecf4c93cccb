// menphina: FFXIV Mod Configuration Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 Isaki
// SPDX-License-Identifier: GPL-3.0-or-later

//! Windows-host environment variable resolution.
//!
//! ```text
//! resolve_host_env("USERPROFILE")
//!        |
//!        v
//! cmd.exe /C echo %USERPROFILE%
//!   stdout -> pipe (parent reads, bounded)
//!   stderr -> null sink
//!        |
//!        v
//! wait child, check exit status
//! strip trailing CRLF, decode utf-8
//! ```
//!
//! WSL executes Windows binaries through its binfmt bridge, so the command
//! interpreter is reachable at its fixed `/mnt/c` path. One child process and
//! one pipe per call; both are torn down before the call returns on every
//! path, including errors.

use std::io::Read;
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use crate::error::ProcessError;

/// The Windows command interpreter as seen from inside the compatibility
/// layer.
pub const WINDOWS_CMD_PATH: &str = "/mnt/c/Windows/System32/cmd.exe";

/// Upper bound on captured child output. An environment variable value is
/// tiny; anything past this is a misbehaving child.
pub const MAX_CAPTURE_BYTES: usize = 4096;

// cmd's `echo` always terminates its output with CRLF, so anything shorter
// than two bytes is insufficient even though the strip step also tolerates a
// bare LF. A lone "\n" writer is not the interpreter we spawned.
const LINE_TERMINATOR_LEN: usize = 2;

/// Resolves an environment variable in the Windows host's process space.
///
/// This indirection exists so the mechanism for crossing the host boundary
/// (subprocess plus pipe today) can change without affecting callers.
///
/// # Errors
///
/// Propagates every [`ProcessError`] from the underlying channel unchanged;
/// additionally fails with [`ProcessError::OutputNotUtf8`] if the captured
/// stream is not well-formed UTF-8.
pub fn resolve_host_env(var_name: &str) -> std::result::Result<String, ProcessError> {
    let mut command = Command::new(WINDOWS_CMD_PATH);
    command.args(["/C", &format!("echo %{var_name}%")]);

    let bytes = run_capture(&mut command, MAX_CAPTURE_BYTES)?;
    String::from_utf8(bytes).map_err(|_| ProcessError::OutputNotUtf8)
}

/// Spawns `command` with stdout piped and stderr nulled, reads its full
/// output subject to `limit`, and waits for termination.
///
/// On success returns the captured bytes with the trailing line terminator
/// stripped. The child is always waited for, including on the overflow and
/// read-error paths, so no zombie or open descriptor outlives this call.
pub(crate) fn run_capture(
    command: &mut Command,
    limit: usize,
) -> std::result::Result<Vec<u8>, ProcessError> {
    let program = command.get_program().to_string_lossy().into_owned();
    debug!(cmd = %program, "exec");

    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| ProcessError::SpawnFailed {
            command: program.clone(),
            source,
        })?;

    let mut stdout = child.stdout.take().ok_or(ProcessError::PipeUnavailable {
        command: program.clone(),
    })?;

    let io_result = read_bounded(&mut stdout, limit);

    // Close the parent's read end before waiting so the child sees EPIPE
    // rather than blocking, then always reap it.
    drop(stdout);
    let wait_result = child.wait();

    let (mut captured, overflowed) = io_result.map_err(ProcessError::ReadFailed)?;
    let status = wait_result.map_err(ProcessError::WaitFailed)?;

    if overflowed {
        return Err(ProcessError::StreamOverflow { limit });
    }
    if !status.success() {
        return Err(ProcessError::ExecutionFailed {
            command: program,
            status: status.to_string(),
        });
    }
    if captured.len() < LINE_TERMINATOR_LEN {
        return Err(ProcessError::InsufficientOutput {
            got: captured.len(),
        });
    }

    strip_line_terminator(&mut captured);
    trace!(bytes = captured.len(), "captured");
    Ok(captured)
}

/// Reads until end of stream or until `limit` bytes would be exceeded.
///
/// On overflow the remainder of the stream is drained and discarded so the
/// writer is never left blocked on a full pipe; the flag in the return value
/// marks that case.
fn read_bounded<R: Read>(reader: &mut R, limit: usize) -> std::io::Result<(Vec<u8>, bool)> {
    let mut captured = Vec::new();
    let mut chunk = [0_u8; 512];

    loop {
        let n = reader.read(&mut chunk)?;
        if n == 0 {
            return Ok((captured, false));
        }
        if captured.len() + n > limit {
            std::io::copy(reader, &mut std::io::sink())?;
            return Ok((Vec::new(), true));
        }
        captured.extend_from_slice(&chunk[..n]);
    }
}

fn strip_line_terminator(captured: &mut Vec<u8>) {
    if captured.ends_with(b"\r\n") {
        captured.truncate(captured.len() - 2);
    } else if captured.ends_with(b"\n") {
        captured.truncate(captured.len() - 1);
    }
}

// menphina: FFXIV Mod Configuration Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 Isaki
// SPDX-License-Identifier: GPL-3.0-or-later

//! Conversion between compatibility-layer and Windows path forms.
//!
//! ```text
//! /mnt/c/Users/Test  <-- to_compat_path   --  C:\Users\Test
//!                    --  to_windows_path  -->
//! ```
//!
//! Both directions are pure and total over the validated grammar; malformed
//! input is rejected, never converted best-effort.

use crate::error::PathError;

/// Fixed segment under which host drives appear inside the compatibility
/// layer's filesystem namespace.
pub const MOUNT_PREFIX: &str = "/mnt/";

// "/mnt/" plus a single drive letter.
const MIN_COMPAT_LEN: usize = MOUNT_PREFIX.len() + 1;

// Drive letter, colon, and at least one remainder character.
const MIN_WINDOWS_LEN: usize = 3;

/// Converts a compatibility-layer path to Windows form.
///
/// `"/mnt/c/Users/Test"` becomes `"C:\Users\Test"`; a bare drive mount
/// `"/mnt/c"` becomes `"C:"`.
///
/// # Errors
///
/// Returns [`PathError::NotCompatForm`] if the input is shorter than the
/// minimum `/mnt/<drive>` prefix, does not start with the mount prefix, or its
/// drive segment is not exactly one alphabetic character.
pub fn to_windows_path(compat: &str) -> std::result::Result<String, PathError> {
    let malformed = |reason| PathError::NotCompatForm {
        path: compat.to_string(),
        reason,
    };

    if compat.len() < MIN_COMPAT_LEN {
        return Err(malformed("shorter than the minimum /mnt/<drive> prefix"));
    }
    if !compat.starts_with(MOUNT_PREFIX) {
        return Err(malformed("missing mount prefix"));
    }

    let drive = compat.as_bytes()[MOUNT_PREFIX.len()];
    if !drive.is_ascii_alphabetic() {
        return Err(malformed("drive segment is not alphabetic"));
    }

    let remainder = &compat[MIN_COMPAT_LEN..];
    if !remainder.is_empty() && !remainder.starts_with('/') {
        return Err(malformed("drive segment is not a single letter"));
    }

    let mut out = String::with_capacity(compat.len());
    out.push(drive.to_ascii_uppercase() as char);
    out.push(':');
    out.extend(
        remainder
            .chars()
            .map(|c| if c == '/' { '\\' } else { c }),
    );
    Ok(out)
}

/// Converts a Windows path to compatibility-layer form.
///
/// `"C:\Users\Test"` becomes `"/mnt/c/Users/Test"`.
///
/// # Errors
///
/// Returns [`PathError::NotWindowsForm`] if the input is shorter than three
/// characters, its first character is not alphabetic, or its second character
/// is not `:`.
pub fn to_compat_path(windows: &str) -> std::result::Result<String, PathError> {
    let malformed = |reason| PathError::NotWindowsForm {
        path: windows.to_string(),
        reason,
    };

    if windows.len() < MIN_WINDOWS_LEN {
        return Err(malformed("shorter than <drive>:<component>"));
    }

    let bytes = windows.as_bytes();
    if !bytes[0].is_ascii_alphabetic() {
        return Err(malformed("drive is not alphabetic"));
    }
    if bytes[1] != b':' {
        return Err(malformed("missing ':' after drive"));
    }

    let mut out = String::with_capacity(MOUNT_PREFIX.len() + windows.len());
    out.push_str(MOUNT_PREFIX);
    out.push(bytes[0].to_ascii_lowercase() as char);
    out.extend(
        windows[2..]
            .chars()
            .map(|c| if c == '\\' { '/' } else { c }),
    );
    Ok(out)
}

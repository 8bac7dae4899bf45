//! Target path handling: wide-text conversion and sidecar location.

use std::path::{Path, PathBuf};

use crate::error::VerifyError;

/// Directory, next to the executable, that holds detached signatures.
pub const SIGNATURES_DIR: &str = "signatures";

/// Extension of detached signature files.
pub const SIGNATURE_EXT: &str = "sig";

/// Locate the detached signature for `target`.
///
/// `D/N.ext` maps to `D/signatures/N.sig`. Only the last extension is
/// replaced, so `tool.tar.gz` maps to `tool.tar.sig`; names without an
/// extension (including dot-files) keep their full name as the stem.
///
/// # Errors
///
/// Returns [`VerifyError::InvalidPath`] when `target` has no file name
/// (`/`, `..`, or an empty path).
pub fn signature_path(target: &Path) -> Result<PathBuf, VerifyError> {
    let stem = target.file_stem().ok_or_else(|| {
        VerifyError::InvalidPath(format!("{} has no file name", target.display()))
    })?;

    let mut name = stem.to_os_string();
    name.push(".");
    name.push(SIGNATURE_EXT);

    let dir = target.parent().unwrap_or_else(|| Path::new(""));
    Ok(dir.join(SIGNATURES_DIR).join(name))
}

/// Convert a UTF-16 path to the canonical path type.
///
/// Trailing NUL terminators, as handed over by C-style wide strings, are
/// dropped.
///
/// # Errors
///
/// Returns [`VerifyError::InvalidPath`] on unpaired surrogates.
pub fn path_from_wide(wide: &[u16]) -> Result<PathBuf, VerifyError> {
    let end = wide.iter().rposition(|&c| c != 0).map_or(0, |i| i + 1);
    String::from_utf16(&wide[..end])
        .map(PathBuf::from)
        .map_err(|e| VerifyError::InvalidPath(format!("path is not valid UTF-16: {e}")))
}

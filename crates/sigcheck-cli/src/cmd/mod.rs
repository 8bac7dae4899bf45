//! Subcommand implementations.
//!
//! Each command returns whether it succeeded; `main` turns that into the
//! process exit status.

pub mod hash;
pub mod key_info;
pub mod sig_path;
pub mod verify;

use std::borrow::Cow;
use std::path::Path;

use anyhow::{Context, Result};
use sigcheck_core::EMBEDDED_PUBLIC_KEY;

/// Key bytes for this run: the `--key` file if given, else the embedded key.
///
/// The bytes are not validated here; verification applies the usual size
/// and parse checks.
pub fn load_key(override_path: Option<&Path>) -> Result<Cow<'static, [u8]>> {
    match override_path {
        Some(path) => {
            tracing::debug!("Using public key from {}", path.display());
            let bytes = std::fs::read(path)
                .with_context(|| format!("Failed to read public key {}", path.display()))?;
            Ok(Cow::Owned(bytes))
        }
        None => Ok(Cow::Borrowed(EMBEDDED_PUBLIC_KEY)),
    }
}

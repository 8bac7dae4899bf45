//! `sigcheck sig-path`

use std::path::Path;

use anyhow::Result;

/// Print the sidecar signature location for `path`.
pub fn sig_path(path: &Path) -> Result<bool> {
    let sig = sigcheck_core::signature_path(path)?;
    println!("{}", sig.display());
    Ok(true)
}

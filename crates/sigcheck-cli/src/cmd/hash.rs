//! `sigcheck hash`

use std::path::PathBuf;

use anyhow::Result;
use sigcheck_core::FileDigest;

/// Print `sha256  path` lines in the format of `sha256sum`.
pub fn hash(files: &[PathBuf]) -> Result<bool> {
    for file in files {
        let digest = FileDigest::compute_file(file)?;
        println!("{digest}  {}", file.display());
    }
    Ok(true)
}

//! Streaming SHA-256 of files on disk.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::VerifyError;

/// Read buffer size used when hashing.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Length of a SHA-256 digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// SHA-256 of a file's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileDigest([u8; DIGEST_LEN]);

impl FileDigest {
    /// Hash the file at `path` in [`CHUNK_SIZE`] pieces.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::OpenTarget`] if the file cannot be opened and
    /// [`VerifyError::ReadTarget`] if a read fails part way through.
    pub fn compute_file(path: &Path) -> Result<Self, VerifyError> {
        let file = File::open(path).map_err(|source| VerifyError::OpenTarget {
            path: path.to_path_buf(),
            source,
        })?;
        Self::compute_reader(file).map_err(|source| VerifyError::ReadTarget {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Hash everything `reader` yields until EOF.
    ///
    /// # Errors
    ///
    /// Propagates any read error other than [`ErrorKind::Interrupted`].
    pub fn compute_reader<R: Read>(mut reader: R) -> std::io::Result<Self> {
        let mut hasher = Sha256::new();
        let mut buf = vec![0u8; CHUNK_SIZE];
        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            hasher.update(&buf[..n]);
        }
        Ok(Self(hasher.finalize().into()))
    }

    /// Hash an in-memory buffer.
    pub fn compute(data: &[u8]) -> Self {
        Self(Sha256::digest(data).into())
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }
}

impl std::fmt::Display for FileDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl AsRef<[u8]> for FileDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

//! Reading detached signature blobs.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::SIGNATURE_LEN;
use crate::digest::CHUNK_SIZE;
use crate::error::VerifyError;

/// Raw PKCS#1 v1.5 signature bytes for a 4096-bit key.
#[derive(Clone, PartialEq, Eq)]
pub struct SignatureBlob(Box<[u8; SIGNATURE_LEN]>);

impl SignatureBlob {
    /// Read the signature file at `path`.
    ///
    /// The file is read to EOF (bounded by the hashing buffer size), so a
    /// file with trailing bytes past the signature is rejected rather than
    /// silently truncated.
    ///
    /// # Errors
    ///
    /// [`VerifyError::OpenSignature`] / [`VerifyError::ReadSignature`] for
    /// I/O failures, [`VerifyError::SignatureLength`] when the byte count is
    /// not exactly [`SIGNATURE_LEN`].
    pub fn read(path: &Path) -> Result<Self, VerifyError> {
        let file = File::open(path).map_err(|source| VerifyError::OpenSignature {
            path: path.to_path_buf(),
            source,
        })?;

        let mut buf = Vec::with_capacity(SIGNATURE_LEN + 1);
        file.take(CHUNK_SIZE as u64)
            .read_to_end(&mut buf)
            .map_err(|source| VerifyError::ReadSignature {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_slice(&buf)
    }

    /// Wrap an in-memory signature.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::SignatureLength`] unless `bytes` is exactly
    /// [`SIGNATURE_LEN`] long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, VerifyError> {
        let arr: [u8; SIGNATURE_LEN] =
            bytes
                .try_into()
                .map_err(|_| VerifyError::SignatureLength {
                    expected: SIGNATURE_LEN,
                    read: bytes.len(),
                })?;
        Ok(Self(Box::new(arr)))
    }

    /// Signature bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl std::fmt::Debug for SignatureBlob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SignatureBlob({}..)", hex::encode(&self.0[..8]))
    }
}

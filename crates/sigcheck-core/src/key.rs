//! Public key resource and its materialization into an RSA key.

use rsa::RsaPublicKey;
use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::pkcs8::DecodePublicKey;
use rsa::traits::PublicKeyParts;

use crate::SIGNATURE_LEN;
use crate::error::VerifyError;

/// Upper bound on the PEM text of the public key.
///
/// A 4096-bit key in SubjectPublicKeyInfo PEM form is exactly 800 bytes.
pub const MAX_PUBLIC_KEY_LEN: usize = 800;

/// Public key bytes compiled in by the build script.
///
/// Empty when the crate was built without `SIGCHECK_PUBLIC_KEY_PATH`.
pub static EMBEDDED_PUBLIC_KEY: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/key_pub.pem"));

/// An opaque, immutable PEM-encoded RSA public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKeyResource<'a> {
    bytes: &'a [u8],
}

impl PublicKeyResource<'static> {
    /// The key embedded at build time.
    pub fn embedded() -> Self {
        Self::new(EMBEDDED_PUBLIC_KEY)
    }
}

impl<'a> PublicKeyResource<'a> {
    /// Wrap raw PEM bytes. No validation happens until [`Self::check_size`].
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Raw PEM bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Size of the resource in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the build carries no key at all.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Reject resources larger than [`MAX_PUBLIC_KEY_LEN`].
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::KeyTooLarge`] with the actual size.
    pub fn check_size(&self) -> Result<(), VerifyError> {
        if self.bytes.len() > MAX_PUBLIC_KEY_LEN {
            return Err(VerifyError::KeyTooLarge {
                size: self.bytes.len(),
            });
        }
        Ok(())
    }

    /// Parse the PEM text into an RSA public key with a 4096-bit modulus.
    ///
    /// Both `BEGIN PUBLIC KEY` (SubjectPublicKeyInfo) and
    /// `BEGIN RSA PUBLIC KEY` (PKCS#1) encodings are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::KeyParse`] if the resource is empty, not UTF-8,
    /// or not an RSA public key, and [`VerifyError::KeySize`] if the modulus
    /// does not produce [`SIGNATURE_LEN`]-byte signatures.
    pub fn materialize(&self) -> Result<RsaPublicKey, VerifyError> {
        if self.bytes.is_empty() {
            return Err(VerifyError::KeyParse(
                "public key resource is empty; this build carries no signing key".to_string(),
            ));
        }

        let pem = std::str::from_utf8(self.bytes)
            .map_err(|e| VerifyError::KeyParse(format!("key is not valid PEM text: {e}")))?;
        let pem = pem.trim();

        let key = match RsaPublicKey::from_public_key_pem(pem) {
            Ok(key) => key,
            Err(spki_err) => RsaPublicKey::from_pkcs1_pem(pem)
                .map_err(|_| VerifyError::KeyParse(spki_err.to_string()))?,
        };

        if key.size() != SIGNATURE_LEN {
            return Err(VerifyError::KeySize {
                bits: key.size() * 8,
                expected: SIGNATURE_LEN * 8,
            });
        }

        Ok(key)
    }
}

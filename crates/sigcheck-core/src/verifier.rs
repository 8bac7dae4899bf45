//! The verification pipeline.
//!
//! key size check → key parse → hash target → locate sidecar → read
//! signature → RSA PKCS#1 v1.5 / SHA-256 verify. Each step returns a
//! `Result`; the first error ends the call. All file handles are scoped to
//! the step that opens them.

use std::path::Path;

use rsa::{Pkcs1v15Sign, RsaPublicKey};
use sha2::Sha256;

use crate::digest::FileDigest;
use crate::error::{FailureKind, VerifyError};
use crate::key::PublicKeyResource;
use crate::path::{path_from_wide, signature_path};
use crate::signature::SignatureBlob;

/// Result of a single verification call.
///
/// `reasons` is ordered; the pipeline stops at the first failure so it holds
/// at most one entry today.
#[derive(Debug)]
pub struct Verification {
    ok: bool,
    reasons: Vec<String>,
    error: Option<VerifyError>,
}

impl Verification {
    fn passed() -> Self {
        Self {
            ok: true,
            reasons: Vec::new(),
            error: None,
        }
    }

    fn failed(error: VerifyError) -> Self {
        Self {
            ok: false,
            reasons: vec![error.to_string()],
            error: Some(error),
        }
    }

    /// Whether the file matched its signature.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Failure reasons, in the order they were recorded.
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    /// All reasons joined into one line; empty on success.
    pub fn diagnostic(&self) -> String {
        self.reasons.join("; ")
    }

    /// The error that stopped the pipeline, if any.
    pub fn error(&self) -> Option<&VerifyError> {
        self.error.as_ref()
    }

    /// Class of the failure, if any.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.error.as_ref().map(VerifyError::kind)
    }

    /// Consume into the `(ok, diagnostic)` pair.
    pub fn into_parts(self) -> (bool, String) {
        let diagnostic = self.diagnostic();
        (self.ok, diagnostic)
    }
}

impl From<Result<(), VerifyError>> for Verification {
    fn from(result: Result<(), VerifyError>) -> Self {
        match result {
            Ok(()) => Self::passed(),
            Err(e) => Self::failed(e),
        }
    }
}

/// Checks executables against detached signatures under one public key.
///
/// Holds only the borrowed key bytes, so it is `Copy`, `Send` and `Sync` and
/// can be shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct Verifier<'k> {
    key: PublicKeyResource<'k>,
}

impl Default for Verifier<'static> {
    fn default() -> Self {
        Self::embedded()
    }
}

impl Verifier<'static> {
    /// Verifier using the key compiled into this binary.
    pub fn embedded() -> Self {
        Self::new(PublicKeyResource::embedded())
    }
}

impl<'k> Verifier<'k> {
    /// Verifier using an explicit key resource.
    pub fn new(key: PublicKeyResource<'k>) -> Self {
        Self { key }
    }

    /// Verifier over raw PEM bytes.
    pub fn with_key_bytes(bytes: &'k [u8]) -> Self {
        Self::new(PublicKeyResource::new(bytes))
    }

    /// The key resource this verifier checks against.
    pub fn key(&self) -> PublicKeyResource<'k> {
        self.key
    }

    /// Verify `path` and fold the result into a [`Verification`].
    pub fn verify(&self, path: impl AsRef<Path>) -> Verification {
        let path = path.as_ref();
        let outcome = Verification::from(self.check(path));
        if let Some(err) = outcome.error() {
            log_failure(path, err);
        }
        outcome
    }

    /// Verify a UTF-16 path. Converted to the canonical path type first.
    pub fn verify_wide(&self, path: &[u16]) -> Verification {
        match path_from_wide(path) {
            Ok(path) => self.verify(path),
            Err(e) => {
                tracing::warn!("Rejected wide path: {e}");
                Verification::failed(e)
            }
        }
    }

    /// Run the pipeline, stopping at the first failing step.
    ///
    /// # Errors
    ///
    /// Returns the [`VerifyError`] of the first failing step.
    pub fn check(&self, path: &Path) -> Result<(), VerifyError> {
        self.key.check_size()?;
        let key = self.key.materialize()?;

        tracing::debug!("Hashing {}", path.display());
        let digest = FileDigest::compute_file(path)?;
        tracing::debug!("SHA256 {} = {digest}", path.display());

        let sig_path = signature_path(path)?;
        tracing::debug!("Reading signature {}", sig_path.display());
        let signature = SignatureBlob::read(&sig_path)?;

        verify_digest(&key, &digest, &signature)?;
        tracing::debug!("Signature valid for {}", path.display());
        Ok(())
    }
}

/// Check a PKCS#1 v1.5 signature over a precomputed SHA-256 digest.
///
/// # Errors
///
/// [`VerifyError::SignatureMismatch`] if the signature does not validate,
/// [`VerifyError::Crypto`] for any other failure inside the RSA library.
pub fn verify_digest(
    key: &RsaPublicKey,
    digest: &FileDigest,
    signature: &SignatureBlob,
) -> Result<(), VerifyError> {
    classify_rsa_result(key.verify(
        Pkcs1v15Sign::new::<Sha256>(),
        digest.as_bytes(),
        signature.as_bytes(),
    ))
}

/// Map the RSA library's answer onto the failure taxonomy.
///
/// The PKCS#1 v1.5 verifier reports wrong lengths, out-of-range signatures
/// and bad padding all as [`rsa::Error::Verification`]; any other variant is
/// a library fault and must not be read as tampering.
fn classify_rsa_result(result: rsa::Result<()>) -> Result<(), VerifyError> {
    match result {
        Ok(()) => Ok(()),
        Err(rsa::Error::Verification) => Err(VerifyError::SignatureMismatch),
        Err(e) => Err(VerifyError::Crypto(e.to_string())),
    }
}

fn log_failure(path: &Path, err: &VerifyError) {
    match err.kind() {
        FailureKind::KeyCorruption | FailureKind::Crypto => {
            tracing::error!(kind = ?err.kind(), "Cannot verify {}: {err}", path.display());
        }
        kind => {
            tracing::warn!(kind = ?kind, "Verification failed for {}: {err}", path.display());
        }
    }
}

/// Verify `path` against the embedded public key.
pub fn verify(path: impl AsRef<Path>) -> Verification {
    Verifier::embedded().verify(path)
}

/// Verify a UTF-16 `path` against the embedded public key.
pub fn verify_wide(path: &[u16]) -> Verification {
    Verifier::embedded().verify_wide(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &[u8] = include_bytes!("../tests/fixtures/key_pub.pem");

    #[test]
    fn success_has_no_reasons() {
        let v = Verification::from(Ok::<(), VerifyError>(()));
        assert!(v.is_ok());
        assert!(v.reasons().is_empty());
        assert_eq!(v.into_parts(), (true, String::new()));
    }

    #[test]
    fn failure_records_exactly_one_reason() {
        let v = Verification::from(Err::<(), _>(VerifyError::SignatureMismatch));
        assert!(!v.is_ok());
        assert_eq!(v.reasons().len(), 1);
        assert_eq!(v.failure_kind(), Some(FailureKind::Mismatch));
        assert_eq!(
            v.diagnostic(),
            "Executable's signature does not match signature file"
        );
    }

    #[test]
    fn library_faults_are_not_reported_as_mismatch() {
        for fault in [
            rsa::Error::Internal,
            rsa::Error::InvalidPaddingScheme,
            rsa::Error::Decryption,
        ] {
            let err = classify_rsa_result(Err(fault)).unwrap_err();
            assert_eq!(err.kind(), FailureKind::Crypto);
            assert!(err.to_string().starts_with("RSA verification failed internally"));
        }
        assert!(matches!(
            classify_rsa_result(Err(rsa::Error::Verification)),
            Err(VerifyError::SignatureMismatch)
        ));
        assert!(classify_rsa_result(Ok(())).is_ok());
    }

    #[test]
    fn undersized_key_rejects_full_length_signature_as_mismatch() {
        let small = include_str!("../tests/fixtures/small_pub.pem");
        let key = <RsaPublicKey as rsa::pkcs8::DecodePublicKey>::from_public_key_pem(small).unwrap();
        let digest = FileDigest::compute(b"payload");
        let signature = SignatureBlob::from_slice(&[0x11; crate::SIGNATURE_LEN]).unwrap();
        assert!(matches!(
            verify_digest(&key, &digest, &signature),
            Err(VerifyError::SignatureMismatch)
        ));
    }

    #[test]
    fn key_checks_run_before_touching_the_target() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.bin");

        let big = vec![b'A'; 801];
        let v = Verifier::with_key_bytes(&big).verify(&missing);
        assert_eq!(v.failure_kind(), Some(FailureKind::KeyCorruption));
        assert!(matches!(v.error(), Some(VerifyError::KeyTooLarge { size: 801 })));

        let v = Verifier::with_key_bytes(b"").verify(&missing);
        assert!(matches!(v.error(), Some(VerifyError::KeyParse(_))));
    }

    #[test]
    fn missing_target_is_an_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let v = Verifier::with_key_bytes(KEY).verify(dir.path().join("gone.bin"));
        assert!(matches!(v.error(), Some(VerifyError::OpenTarget { .. })));
        assert_eq!(v.failure_kind(), Some(FailureKind::Io));
    }

    #[test]
    fn missing_sidecar_reports_resolved_path() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("app.bin");
        std::fs::write(&target, b"payload").unwrap();

        let v = Verifier::with_key_bytes(KEY).verify(&target);
        let expected = dir.path().join("signatures").join("app.sig");
        assert!(matches!(v.error(), Some(VerifyError::OpenSignature { path, .. }) if *path == expected));
        assert!(v.diagnostic().contains(&expected.display().to_string()));
    }

    #[test]
    fn verifier_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Verifier<'static>>();
    }
}

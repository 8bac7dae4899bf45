//! Failure taxonomy for signature verification

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Broad class of a verification failure.
///
/// Operators care about which class a failure falls in more than about the
/// exact message: a mismatch means tampering or a stale signature, a
/// malformed signature means a packaging problem, and key corruption means
/// the verifying binary itself is broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Embedded key is oversized, unparsable, or of an unsupported size.
    KeyCorruption,
    /// Target or signature file could not be opened or read.
    Io,
    /// Signature file has the wrong byte count.
    MalformedSignature,
    /// Signature does not validate under the public key.
    Mismatch,
    /// The RSA implementation failed for a reason other than a mismatch.
    Crypto,
    /// Target path could not be canonicalized or has no file name.
    InvalidPath,
}

/// Errors that stop the verification pipeline.
///
/// Display strings are the diagnostics handed back to callers, so they carry
/// byte counts, resolved paths and OS error codes.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// The embedded key exceeds the sanity bound.
    #[error("Invalid public key, size is too large: {size} bytes")]
    KeyTooLarge {
        /// Size of the key resource in bytes.
        size: usize,
    },

    /// The key resource is not a PEM-encoded RSA public key.
    #[error("Failed to load RSA public key: {0}")]
    KeyParse(String),

    /// The key parsed but its modulus does not match the signature size.
    #[error("Unsupported RSA key size: {bits} bits, expected {expected} bits")]
    KeySize {
        /// Modulus size of the parsed key.
        bits: usize,
        /// Modulus size the signature format requires.
        expected: usize,
    },

    /// The target executable could not be opened.
    #[error("Failed to open executable ({}) for reading: {}", .path.display(), os_code(.source))]
    OpenTarget {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying OS error.
        source: io::Error,
    },

    /// Reading the target failed part way through hashing.
    #[error("Failed to read executable ({}) while hashing: {}", .path.display(), os_code(.source))]
    ReadTarget {
        /// Path being hashed.
        path: PathBuf,
        /// Underlying OS error.
        source: io::Error,
    },

    /// The sidecar signature file could not be opened.
    #[error("Failed to open signature file ({}) for reading: {}", .path.display(), os_code(.source))]
    OpenSignature {
        /// Resolved sidecar path.
        path: PathBuf,
        /// Underlying OS error.
        source: io::Error,
    },

    /// Reading the sidecar signature file failed.
    #[error("Failed to read signature file ({}): {}", .path.display(), os_code(.source))]
    ReadSignature {
        /// Resolved sidecar path.
        path: PathBuf,
        /// Underlying OS error.
        source: io::Error,
    },

    /// The signature file does not hold exactly one signature.
    #[error(
        "Signature file is an invalid size, or failed to read entire file. Expected {expected} bytes, read {read}."
    )]
    SignatureLength {
        /// Required signature length.
        expected: usize,
        /// Bytes actually read.
        read: usize,
    },

    /// The signature is well formed but does not validate.
    #[error("Executable's signature does not match signature file")]
    SignatureMismatch,

    /// The RSA implementation reported an error other than a mismatch.
    #[error("RSA verification failed internally: {0}")]
    Crypto(String),

    /// The target path cannot be used.
    #[error("Invalid executable path: {0}")]
    InvalidPath(String),
}

impl VerifyError {
    /// Classify this error for callers that branch on the failure class.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::KeyTooLarge { .. } | Self::KeyParse(_) | Self::KeySize { .. } => {
                FailureKind::KeyCorruption
            }
            Self::OpenTarget { .. }
            | Self::ReadTarget { .. }
            | Self::OpenSignature { .. }
            | Self::ReadSignature { .. } => FailureKind::Io,
            Self::SignatureLength { .. } => FailureKind::MalformedSignature,
            Self::SignatureMismatch => FailureKind::Mismatch,
            Self::Crypto(_) => FailureKind::Crypto,
            Self::InvalidPath(_) => FailureKind::InvalidPath,
        }
    }

    /// Raw OS error code of the underlying I/O failure, if any.
    pub fn os_error(&self) -> Option<i32> {
        match self {
            Self::OpenTarget { source, .. }
            | Self::ReadTarget { source, .. }
            | Self::OpenSignature { source, .. }
            | Self::ReadSignature { source, .. } => source.raw_os_error(),
            _ => None,
        }
    }
}

/// Render the OS error code when there is one, the error text otherwise.
fn os_code(err: &io::Error) -> String {
    match err.raw_os_error() {
        Some(code) => code.to_string(),
        None => err.to_string(),
    }
}

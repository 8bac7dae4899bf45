//! sigcheck core - detached signature verification for executables
#![allow(clippy::missing_panics_doc)]
//!
//! Answers one question: does the executable at a given path match the
//! RSA signature stored next to it, under the public key compiled into this
//! binary?
//!
//! # Layout on disk
//!
//! ```text
//! /opt/app/
//! ├── app.bin
//! └── signatures/
//!     └── app.sig     # 512 raw bytes, PKCS#1 v1.5 over SHA256(app.bin)
//! ```
//!
//! # Example
//!
//! ```no_run
//! let outcome = sigcheck_core::verify("/opt/app/app.bin");
//! if !outcome.is_ok() {
//!     eprintln!("refusing to launch: {}", outcome.diagnostic());
//! }
//! ```
//!
//! The key is embedded by the build script from `SIGCHECK_PUBLIC_KEY_PATH`.
//! Builds without it carry an empty key and every verification fails with a
//! key-load diagnostic.

pub mod digest;
pub mod error;
pub mod key;
pub mod path;
pub mod signature;
pub mod verifier;

pub use digest::FileDigest;
pub use error::{FailureKind, VerifyError};
pub use key::{EMBEDDED_PUBLIC_KEY, MAX_PUBLIC_KEY_LEN, PublicKeyResource};
pub use path::signature_path;
pub use signature::SignatureBlob;
pub use verifier::{Verification, Verifier, verify, verify_wide};

/// Size in bytes of a signature made with the supported 4096-bit RSA key.
pub const SIGNATURE_LEN: usize = 512;

//! sigcheck - verify executables against detached RSA signatures
#![allow(clippy::missing_errors_doc)]
//!
//! Thin operator front end over `sigcheck-core`.
//!
//! # Signature layout
//!
//! ```text
//! <dir>/
//! ├── tool.bin
//! └── signatures/
//!     └── tool.sig    # 512 raw bytes
//! ```

pub mod cmd;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level command line.
#[derive(Debug, Parser)]
#[command(name = "sigcheck")]
#[command(version = env!("SIGCHECK_VERSION"), about = "Verify executables against detached RSA signatures")]
pub struct Cli {
    /// PEM public key to use instead of the embedded one
    #[arg(long, global = true, env = "SIGCHECK_KEY_FILE")]
    pub key: Option<PathBuf>,

    /// Only print failures
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Verify executables against their detached signatures
    Verify {
        /// Executables to verify
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Print where the signature for an executable is expected
    #[command(name = "sig-path")]
    SigPath {
        /// Executable path
        path: PathBuf,
    },
    /// Compute SHA256 hash of a file
    Hash {
        /// Files to hash
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Show the public key verification will use
    #[command(name = "key-info")]
    KeyInfo,
}

//! Build script to embed the signing public key
//!
//! `SIGCHECK_PUBLIC_KEY_PATH` names a PEM file that is copied into `OUT_DIR`
//! and compiled in with `include_bytes!`. Unsigned builds embed an empty key.

use std::path::PathBuf;

const KEY_ENV: &str = "SIGCHECK_PUBLIC_KEY_PATH";

// Must match `key::MAX_PUBLIC_KEY_LEN`.
const MAX_PUBLIC_KEY_LEN: usize = 800;

fn main() {
    println!("cargo:rerun-if-env-changed={KEY_ENV}");

    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").expect("cargo sets OUT_DIR"));
    let dest = out_dir.join("key_pub.pem");

    let key = match std::env::var_os(KEY_ENV) {
        Some(path) if !path.is_empty() => {
            let path = PathBuf::from(path);
            println!("cargo:rerun-if-changed={}", path.display());
            let bytes = std::fs::read(&path).unwrap_or_else(|e| {
                panic!("failed to read {KEY_ENV}={}: {e}", path.display())
            });
            if bytes.len() > MAX_PUBLIC_KEY_LEN {
                println!(
                    "cargo:warning=public key {} is {} bytes (limit {MAX_PUBLIC_KEY_LEN}); verification will reject it",
                    path.display(),
                    bytes.len()
                );
            }
            bytes
        }
        _ => Vec::new(),
    };

    std::fs::write(&dest, key)
        .unwrap_or_else(|e| panic!("failed to write {}: {e}", dest.display()));
}

//! `sigcheck verify`

use std::path::PathBuf;

use sigcheck_core::Verifier;

/// Verify every path, printing one line per file. Returns `true` if all passed.
pub fn verify(key: &[u8], paths: &[PathBuf], quiet: bool) -> bool {
    let verifier = Verifier::with_key_bytes(key);
    let mut all_ok = true;

    for path in paths {
        let outcome = verifier.verify(path);
        if outcome.is_ok() {
            if !quiet {
                println!("{}: ok", path.display());
            }
        } else {
            all_ok = false;
            println!("{}: FAILED: {}", path.display(), outcome.diagnostic());
        }
    }

    all_ok
}

//! `sigcheck key-info`

use sigcheck_core::{MAX_PUBLIC_KEY_LEN, PublicKeyResource, SIGNATURE_LEN, VerifyError};

/// Report on the key bytes. Returns `false` if the key is unusable.
pub fn key_info(key: &[u8]) -> bool {
    println!("size: {} bytes (limit {MAX_PUBLIC_KEY_LEN})", key.len());
    match check(PublicKeyResource::new(key)) {
        Ok(()) => {
            println!("status: usable, RSA-{}", SIGNATURE_LEN * 8);
            true
        }
        Err(e) => {
            println!("status: unusable: {e}");
            false
        }
    }
}

fn check(key: PublicKeyResource<'_>) -> Result<(), VerifyError> {
    key.check_size()?;
    key.materialize()?;
    Ok(())
}

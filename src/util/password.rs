//! Salted password hashing for stored user records.
//!
//! Hashes are encoded as `sha256$<salt>$<digest>` with both parts in standard
//! base64, where the digest is `SHA-256(salt || password)`.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use sha2::{Digest, Sha256};

const SCHEME: &str = "sha256";

fn digest(salt: &[u8], password: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().to_vec()
}

/// Hash `password` with a fresh random 16 byte salt.
pub fn hash(password: &str) -> String {
    let salt: [u8; 16] = rand::random();

    format!(
        "{}${}${}",
        SCHEME,
        STANDARD.encode(salt),
        STANDARD.encode(digest(&salt, password))
    )
}

/// Check `password` against a hash produced by [`hash`].
///
/// Returns `false` for hashes in any other format rather than erroring.
pub fn verify(password: &str, hashed: &str) -> bool {
    let mut parts = hashed.split('$');

    let (Some(SCHEME), Some(salt), Some(expected), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    let (Ok(salt), Ok(expected)) = (STANDARD.decode(salt), STANDARD.decode(expected)) else {
        return false;
    };

    digest(&salt, password) == expected
}

//! Session key fingerprinting.
//!
//! A truncated SHA-256 digest of the signing material lets operators confirm
//! which key a process booted with, without logging the key itself. The
//! fingerprint appears once in the startup log.

use actix_web::cookie::Key;
use sha2::{Digest, Sha256};

const FINGERPRINT_BYTES: usize = 8;

/// First 8 bytes of the SHA-256 of the key's signing material, hex-encoded.
#[must_use]
pub fn key_fingerprint(key: &Key) -> String {
    let mut hasher = Sha256::new();
    hasher.update(key.signing());
    let digest = hasher.finalize();
    hex::encode(digest.get(..FINGERPRINT_BYTES).unwrap_or_default())
}

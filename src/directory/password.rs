//! Salted one-way password hashing.
//!
//! Digests are self-describing strings of the form
//! `pbkdf2-sha256$<iterations>$<salt b64>$<digest b64>`, so the iteration
//! count can be raised later without invalidating stored credentials.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use pbkdf2::pbkdf2_hmac;
use rand_core::{OsRng, RngCore};
use sha2::Sha256;

const SCHEME: &str = "pbkdf2-sha256";
const ITERATIONS: u32 = 200_000;
const SALT_LEN: usize = 16;
const KEY_LEN: usize = 32;

fn derive(password: &str, salt: &[u8], iterations: u32) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut key);
    key
}

/// Hash a password with a fresh random salt.
pub fn hash(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    let key = derive(password, &salt, ITERATIONS);
    format!(
        "{SCHEME}${ITERATIONS}${}${}",
        B64.encode(salt),
        B64.encode(key)
    )
}

/// Verify a password against a stored digest string.
///
/// Unparseable digests verify as false — a corrupt record must never become
/// a login bypass.
pub fn verify(password: &str, stored: &str) -> bool {
    let mut parts = stored.split('$');
    let (Some(scheme), Some(iterations), Some(salt), Some(digest)) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    if scheme != SCHEME || parts.next().is_some() {
        return false;
    }
    let Ok(iterations) = iterations.parse::<u32>() else {
        return false;
    };
    let (Ok(salt), Ok(digest)) = (B64.decode(salt), B64.decode(digest)) else {
        return false;
    };

    let derived = derive(password, &salt, iterations);
    constant_time_eq(&derived, &digest)
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b) {
        diff |= x ^ y;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let stored = hash("hunter2");
        assert!(verify("hunter2", &stored));
        assert!(!verify("hunter3", &stored));
    }

    #[test]
    fn test_digest_is_not_the_password() {
        let stored = hash("hunter2");
        assert!(!stored.contains("hunter2"));
        assert!(stored.starts_with("pbkdf2-sha256$"));
    }

    #[test]
    fn test_salt_is_fresh_per_hash() {
        assert_ne!(hash("same"), hash("same"));
    }

    #[test]
    fn test_garbage_digest_never_verifies() {
        assert!(!verify("anything", ""));
        assert!(!verify("anything", "plaintext-password"));
        assert!(!verify("anything", "pbkdf2-sha256$notanumber$AA==$AA=="));
        assert!(!verify("anything", "pbkdf2-sha256$1000$!!!$AA=="));
        assert!(!verify("anything", "pbkdf2-sha256$1000$AA==$AA==$extra"));
    }

    #[test]
    fn test_empty_password_still_hashes() {
        // Registration accepts empty strings; the digest must too.
        let stored = hash("");
        assert!(verify("", &stored));
        assert!(!verify("x", &stored));
    }
}

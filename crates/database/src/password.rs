//! Password hashing and verification.
//!
//! Hashes are PBKDF2-HMAC-SHA256 with a per-password random salt, stored
//! as `iterations$salt$key` with hex-encoded salt and key. The iteration
//! count is part of the encoding so it can be raised without invalidating
//! existing hashes.

use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;
use subtle::ConstantTimeEq;

const PBKDF2_ITERATIONS: u32 = 100_000;
const SALT_LENGTH: usize = 16;
const KEY_LENGTH: usize = 32;

/// Hash a password for storage.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LENGTH];
    rand::thread_rng().fill_bytes(&mut salt);
    let key = derive(password, &salt, PBKDF2_ITERATIONS);
    format!(
        "{}${}${}",
        PBKDF2_ITERATIONS,
        hex::encode(salt),
        hex::encode(key)
    )
}

/// Verify a password against a stored hash.
///
/// Returns false for malformed hashes rather than erroring; a corrupt
/// stored hash is indistinguishable from a wrong password.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let mut parts = stored.split('$');
    let (Some(iterations), Some(salt), Some(key)) = (parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    if parts.next().is_some() {
        return false;
    }

    let Ok(iterations) = iterations.parse::<u32>() else {
        return false;
    };
    let Ok(salt) = hex::decode(salt) else {
        return false;
    };
    let Ok(stored_key) = hex::decode(key) else {
        return false;
    };

    let computed = derive(password, &salt, iterations);
    computed[..].ct_eq(&stored_key).into()
}

fn derive(password: &str, salt: &[u8], iterations: u32) -> [u8; KEY_LENGTH] {
    let mut key = [0u8; KEY_LENGTH];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut key);
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("p4ss");
        assert!(verify_password("p4ss", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("p4ss");
        let b = hash_password("p4ss");
        assert_ne!(a, b);
        assert!(verify_password("p4ss", &a));
        assert!(verify_password("p4ss", &b));
    }

    #[test]
    fn test_malformed_hash_rejected() {
        assert!(!verify_password("p4ss", ""));
        assert!(!verify_password("p4ss", "not-a-hash"));
        assert!(!verify_password("p4ss", "100000$zz$zz"));
        assert!(!verify_password("p4ss", "100000$00$00$trailing"));
    }
}

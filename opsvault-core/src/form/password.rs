//! Password generation for password fields.

use rand::rngs::OsRng;
use rand::{Rng, TryRngCore};

const CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Default length for generated passwords.
pub const DEFAULT_PASSWORD_LEN: usize = 16;

fn random_index(limit: usize) -> usize {
    // OS entropy when available, thread RNG otherwise.
    match OsRng.try_next_u32() {
        Ok(v) => v as usize % limit,
        Err(_) => rand::rng().random_range(0..limit),
    }
}

/// Generate a random password over the full mixed charset.
#[must_use]
pub fn generate_password(length: usize) -> String {
    (0..length)
        .map(|_| CHARSET[random_index(CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_length_from_charset() {
        let pw = generate_password(DEFAULT_PASSWORD_LEN);
        assert_eq!(pw.len(), DEFAULT_PASSWORD_LEN);
        assert!(pw.bytes().all(|b| CHARSET.contains(&b)));
    }

    #[test]
    fn successive_passwords_differ() {
        assert_ne!(generate_password(32), generate_password(32));
    }
}

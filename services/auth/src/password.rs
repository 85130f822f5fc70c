//! Password storage schemes
//!
//! `Plaintext` keeps rows written by the legacy service readable: passwords
//! are stored and compared verbatim. `Argon2` stores salted PHC strings for
//! new registrations.

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use serde::Deserialize;
use tracing::warn;

/// How passwords are written to and checked against the User Store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordScheme {
    #[default]
    Plaintext,
    Argon2,
}

impl PasswordScheme {
    /// Produce the value to persist for `password`
    pub fn seal(&self, password: &str) -> Result<String, argon2::password_hash::Error> {
        match self {
            PasswordScheme::Plaintext => Ok(password.to_string()),
            PasswordScheme::Argon2 => {
                let salt = SaltString::generate(&mut rand::thread_rng());
                let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
                Ok(hash.to_string())
            }
        }
    }

    /// Check `password` against a previously sealed value
    pub fn verify(&self, stored: &str, password: &str) -> bool {
        match self {
            PasswordScheme::Plaintext => stored == password,
            PasswordScheme::Argon2 => match PasswordHash::new(stored) {
                Ok(parsed) => Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok(),
                Err(e) => {
                    warn!("Stored password is not a valid argon2 hash: {}", e);
                    false
                }
            },
        }
    }
}

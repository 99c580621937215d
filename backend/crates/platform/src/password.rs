//! Password Hashing and Verification
//!
//! - Argon2id hashing (memory-hard, salted, PHC string output)
//! - Zeroization of clear text passwords
//! - Constant-time verification (inside the argon2 crate)
//! - Optional application-wide pepper
//!
//! Password *policy* (length rules etc.) is not enforced here; callers
//! validate before hashing.

use std::fmt;

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};
use rand::rngs::OsRng;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed (resource exhaustion, bad parameters)
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Argon2 cost parameters rejected
    #[error("Invalid Argon2 parameters: {0}")]
    InvalidParams(String),
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password, wiped from memory on drop.
///
/// Not `Clone`, and `Debug` is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Wrap user input as-is. No trimming or normalization.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Length in UTF-16 code units, as browsers count it
    pub fn utf16_len(&self) -> usize {
        self.0.encode_utf16().count()
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Argon2 hash in PHC string format
///
/// The string carries algorithm, version, cost parameters, salt and digest,
/// so verification needs nothing else.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Load a stored hash without parsing it.
    ///
    /// A value that is not a valid PHC string simply never verifies.
    pub fn from_stored(s: impl Into<String>) -> Self {
        Self { hash: s.into() }
    }

    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Hasher
// ============================================================================

/// Argon2id cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argon2Cost {
    /// Memory in KiB
    pub memory_kib: u32,
    /// Iterations
    pub iterations: u32,
    /// Lanes
    pub parallelism: u32,
}

impl Default for Argon2Cost {
    /// OWASP baseline: m=19456 (19 MiB), t=2, p=1
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

/// Argon2id password hasher
#[derive(Clone)]
pub struct PasswordHashing {
    argon2: Argon2<'static>,
    pepper: Option<Vec<u8>>,
}

impl PasswordHashing {
    pub fn new(cost: Argon2Cost, pepper: Option<Vec<u8>>) -> Result<Self, PasswordHashError> {
        let params = Params::new(cost.memory_kib, cost.iterations, cost.parallelism, None)
            .map_err(|e| PasswordHashError::InvalidParams(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
            pepper,
        })
    }

    /// Hash with a fresh 128-bit random salt
    pub fn hash(&self, password: &ClearTextPassword) -> Result<HashedPassword, PasswordHashError> {
        let password_bytes = self.peppered(password);
        let salt = SaltString::generate(OsRng);

        let hash = self
            .argon2
            .hash_password(&password_bytes, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }

    /// `true` iff `password` reproduces the digest under the parameters
    /// encoded in `hashed`. A malformed hash never verifies.
    pub fn verify(&self, hashed: &HashedPassword, password: &ClearTextPassword) -> bool {
        let password_bytes = self.peppered(password);

        let Ok(parsed_hash) = PasswordHash::new(&hashed.hash) else {
            return false;
        };

        self.argon2
            .verify_password(&password_bytes, &parsed_hash)
            .is_ok()
    }

    fn peppered(&self, password: &ClearTextPassword) -> Zeroizing<Vec<u8>> {
        let mut bytes = Zeroizing::new(password.as_bytes().to_vec());
        if let Some(pepper) = &self.pepper {
            bytes.extend_from_slice(pepper);
        }
        bytes
    }
}

impl fmt::Debug for PasswordHashing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHashing")
            .field("peppered", &self.pepper.is_some())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap() -> PasswordHashing {
        let cost = Argon2Cost {
            memory_kib: 64,
            iterations: 1,
            parallelism: 1,
        };
        PasswordHashing::new(cost, None).unwrap()
    }

    #[test]
    fn test_hash_and_verify() {
        let hashing = cheap();
        let password = ClearTextPassword::new("password123");
        let hashed = hashing.hash(&password).unwrap();

        assert!(hashing.verify(&hashed, &password));
        assert!(!hashing.verify(&hashed, &ClearTextPassword::new("password124")));
    }

    #[test]
    fn test_hash_is_phc_argon2id() {
        let hashed = cheap().hash(&ClearTextPassword::new("hunter22")).unwrap();
        assert!(hashed.as_phc_string().starts_with("$argon2id$v=19$"));
        assert_ne!(hashed.as_phc_string(), "hunter22");
    }

    #[test]
    fn test_same_password_different_salt() {
        let hashing = cheap();
        let a = hashing.hash(&ClearTextPassword::new("same-password")).unwrap();
        let b = hashing.hash(&ClearTextPassword::new("same-password")).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_uses_encoded_params() {
        // Hash produced under other costs still verifies
        let strong = PasswordHashing::new(
            Argon2Cost {
                memory_kib: 128,
                iterations: 2,
                parallelism: 1,
            },
            None,
        )
        .unwrap();
        let password = ClearTextPassword::new("correct horse");
        let hashed = strong.hash(&password).unwrap();

        assert!(cheap().verify(&hashed, &password));
    }

    #[test]
    fn test_hash_with_pepper() {
        let password = ClearTextPassword::new("TestPassword123!");
        let cost = Argon2Cost {
            memory_kib: 64,
            iterations: 1,
            parallelism: 1,
        };
        let peppered = PasswordHashing::new(cost, Some(b"pepper".to_vec())).unwrap();
        let hashed = peppered.hash(&password).unwrap();

        assert!(peppered.verify(&hashed, &password));
        assert!(!cheap().verify(&hashed, &password));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let hashing = cheap();
        let password = ClearTextPassword::new("roundtrip");
        let hashed = hashing.hash(&password).unwrap();

        let restored = HashedPassword::from_stored(hashed.as_phc_string());
        assert!(hashing.verify(&restored, &password));
    }

    #[test]
    fn test_malformed_stored_hash_never_verifies() {
        let hashing = cheap();
        let password = ClearTextPassword::new("password123");

        for stored in ["not_a_valid_hash", "", "$2b$10$bcryptlegacyhash"] {
            assert!(!hashing.verify(&HashedPassword::from_stored(stored), &password));
        }
    }

    #[test]
    fn test_invalid_params() {
        let cost = Argon2Cost {
            memory_kib: 1,
            iterations: 0,
            parallelism: 1,
        };
        assert!(matches!(
            PasswordHashing::new(cost, None),
            Err(PasswordHashError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_empty_password_is_hashable() {
        let hashing = cheap();
        let empty = ClearTextPassword::new("");
        let hashed = hashing.hash(&empty).unwrap();
        assert!(hashing.verify(&hashed, &empty));
    }

    #[test]
    fn test_utf16_len() {
        assert_eq!(ClearTextPassword::new("パスワ").utf16_len(), 3);
        assert_eq!(ClearTextPassword::new("😀").utf16_len(), 2);
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::new("secret");
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));

        let hashed = cheap().hash(&password).unwrap();
        assert!(!format!("{:?}", hashed).contains("argon2"));
    }
}

//! Argon2id credential hasher
//!
//! Delegates to `platform::password` and runs the CPU-heavy work on the
//! blocking thread pool so request tasks only suspend while it runs.

use std::sync::Arc;

use platform::password::{Argon2Cost, ClearTextPassword, HashedPassword, PasswordHashing};

use crate::application::config::AuthConfig;
use crate::domain::hasher::CredentialHasher;
use crate::error::AuthResult;

#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    hashing: Arc<PasswordHashing>,
}

impl Argon2Hasher {
    pub fn new(cost: Argon2Cost, pepper: Option<Vec<u8>>) -> AuthResult<Self> {
        Ok(Self {
            hashing: Arc::new(PasswordHashing::new(cost, pepper)?),
        })
    }

    pub fn from_config(config: &AuthConfig) -> AuthResult<Self> {
        Self::new(config.argon2_cost, config.password_pepper.clone())
    }
}

impl CredentialHasher for Argon2Hasher {
    async fn hash(&self, password: ClearTextPassword) -> AuthResult<HashedPassword> {
        let hashing = self.hashing.clone();
        let hashed = tokio::task::spawn_blocking(move || hashing.hash(&password)).await??;
        Ok(hashed)
    }

    async fn verify(
        &self,
        hashed: HashedPassword,
        candidate: ClearTextPassword,
    ) -> AuthResult<bool> {
        let hashing = self.hashing.clone();
        let valid =
            tokio::task::spawn_blocking(move || hashing.verify(&hashed, &candidate)).await?;
        Ok(valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> Argon2Hasher {
        let cost = Argon2Cost {
            memory_kib: 64,
            iterations: 1,
            parallelism: 1,
        };
        Argon2Hasher::new(cost, None).unwrap()
    }

    #[tokio::test]
    async fn test_hash_then_verify() {
        let hasher = hasher();
        let hashed = hasher
            .hash(ClearTextPassword::new("password123"))
            .await
            .unwrap();

        assert_ne!(hashed.as_phc_string(), "password123");
        assert!(
            hasher
                .verify(hashed.clone(), ClearTextPassword::new("password123"))
                .await
                .unwrap()
        );
        assert!(
            !hasher
                .verify(hashed, ClearTextPassword::new("password12"))
                .await
                .unwrap()
        );
    }

    #[test]
    fn test_rejects_invalid_cost() {
        let cost = Argon2Cost {
            memory_kib: 64,
            iterations: 0,
            parallelism: 1,
        };
        assert!(Argon2Hasher::new(cost, None).is_err());
    }
}

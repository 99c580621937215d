//! Credential Hasher port

use platform::password::{ClearTextPassword, HashedPassword};

use crate::error::AuthResult;

/// One-way password hashing
///
/// Implementations may move the work off the async executor, so both
/// methods take ownership of their inputs.
#[trait_variant::make(CredentialHasher: Send)]
pub trait LocalCredentialHasher {
    /// Salted, self-describing hash. Errors only on internal failure.
    async fn hash(&self, password: ClearTextPassword) -> AuthResult<HashedPassword>;

    /// `Ok(false)` on mismatch; `Err` only on internal failure.
    async fn verify(
        &self,
        hashed: HashedPassword,
        candidate: ClearTextPassword,
    ) -> AuthResult<bool>;
}

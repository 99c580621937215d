//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::hasher::CredentialHasher;
use crate::domain::outcome::AuthOutcome;
use crate::domain::repository::UserRepository;
use crate::domain::validation::{self, FieldError};
use crate::domain::value_object::credentials::Credentials;
use crate::error::{AuthError, AuthResult};

/// Register use case
pub struct RegisterUseCase<U, H>
where
    U: UserRepository,
    H: CredentialHasher,
{
    user_repo: Arc<U>,
    hasher: Arc<H>,
}

impl<U, H> RegisterUseCase<U, H>
where
    U: UserRepository,
    H: CredentialHasher,
{
    pub fn new(user_repo: Arc<U>, hasher: Arc<H>) -> Self {
        Self { user_repo, hasher }
    }

    /// Validate, hash, persist.
    ///
    /// Nothing is hashed or written when validation fails. A duplicate name
    /// is detected by the repository's unique constraint, not a pre-check.
    pub async fn execute(&self, credentials: Credentials) -> AuthResult<AuthOutcome> {
        if let Some(error) = validation::validate_registration(&credentials) {
            tracing::debug!(field = %error.field, "Registration rejected by validation");
            return Ok(AuthOutcome::reject(error));
        }

        let Credentials { username, password } = credentials;

        let password_hash = self.hasher.hash(password).await?;
        let user = User::new(username, password_hash);

        match self.user_repo.create(&user).await {
            Ok(()) => {}
            Err(AuthError::UserNameTaken) => {
                tracing::debug!(user_name = %user.user_name, "Registration rejected: name taken");
                return Ok(AuthOutcome::reject(FieldError::username_taken()));
            }
            Err(e) => return Err(e),
        }

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User registered"
        );

        Ok(AuthOutcome::Authenticated(user))
    }
}

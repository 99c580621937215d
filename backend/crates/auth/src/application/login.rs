//! Login Use Case
//!
//! Checks a username/password pair against the stored hash. Session
//! handling happens in the presentation layer.

use std::sync::Arc;

use crate::domain::hasher::CredentialHasher;
use crate::domain::outcome::AuthOutcome;
use crate::domain::repository::UserRepository;
use crate::domain::validation::FieldError;
use crate::domain::value_object::credentials::Credentials;
use crate::error::AuthResult;

/// Login use case
pub struct LoginUseCase<U, H>
where
    U: UserRepository,
    H: CredentialHasher,
{
    user_repo: Arc<U>,
    hasher: Arc<H>,
}

impl<U, H> LoginUseCase<U, H>
where
    U: UserRepository,
    H: CredentialHasher,
{
    pub fn new(user_repo: Arc<U>, hasher: Arc<H>) -> Self {
        Self { user_repo, hasher }
    }

    /// Unknown names and wrong passwords are reported on different fields.
    pub async fn execute(&self, credentials: Credentials) -> AuthResult<AuthOutcome> {
        let Credentials { username, password } = credentials;

        let Some(user) = self.user_repo.find_by_user_name(&username).await? else {
            tracing::warn!(user_name = %username, "Login rejected: unknown user name");
            return Ok(AuthOutcome::reject(FieldError::username_not_found()));
        };

        let valid = self
            .hasher
            .verify(user.password_hash.clone(), password)
            .await?;

        if !valid {
            tracing::warn!(user_id = %user.user_id, "Login rejected: incorrect password");
            return Ok(AuthOutcome::reject(FieldError::incorrect_password()));
        }

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(AuthOutcome::Authenticated(user))
    }
}

//! Auth Service
//!
//! Ties the use cases to one repository and one hasher. GraphQL resolvers
//! see it only as `Arc<dyn Authenticator>`, so the schema type does not
//! depend on the storage backend.

use std::sync::Arc;

use async_trait::async_trait;
use kernel::id::UserId;

use crate::application::{CurrentUserUseCase, LoginUseCase, RegisterUseCase};
use crate::domain::entity::user::User;
use crate::domain::hasher::CredentialHasher;
use crate::domain::outcome::AuthOutcome;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::credentials::Credentials;
use crate::error::AuthResult;

/// Object-safe facade over the auth use cases
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn register(&self, credentials: Credentials) -> AuthResult<AuthOutcome>;

    async fn login(&self, credentials: Credentials) -> AuthResult<AuthOutcome>;

    async fn current_user(&self, user_id: UserId) -> AuthResult<Option<User>>;
}

/// Auth service
pub struct AuthService<U, H> {
    user_repo: Arc<U>,
    hasher: Arc<H>,
}

impl<U, H> AuthService<U, H> {
    pub fn new(user_repo: Arc<U>, hasher: Arc<H>) -> Self {
        Self { user_repo, hasher }
    }
}

impl<U, H> Clone for AuthService<U, H> {
    fn clone(&self) -> Self {
        Self {
            user_repo: self.user_repo.clone(),
            hasher: self.hasher.clone(),
        }
    }
}

#[async_trait]
impl<U, H> Authenticator for AuthService<U, H>
where
    U: UserRepository + Send + Sync + 'static,
    H: CredentialHasher + Send + Sync + 'static,
{
    async fn register(&self, credentials: Credentials) -> AuthResult<AuthOutcome> {
        RegisterUseCase::new(self.user_repo.clone(), self.hasher.clone())
            .execute(credentials)
            .await
    }

    async fn login(&self, credentials: Credentials) -> AuthResult<AuthOutcome> {
        LoginUseCase::new(self.user_repo.clone(), self.hasher.clone())
            .execute(credentials)
            .await
    }

    async fn current_user(&self, user_id: UserId) -> AuthResult<Option<User>> {
        CurrentUserUseCase::new(self.user_repo.clone())
            .execute(&user_id)
            .await
    }
}

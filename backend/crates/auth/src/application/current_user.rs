//! Current User Use Case
//!
//! Resolves the user ID stored in a session.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;

pub struct CurrentUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> CurrentUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// `None` when the user behind a session no longer exists
    pub async fn execute(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let user = self.user_repo.find_by_id(user_id).await?;

        if user.is_none() {
            tracing::debug!(user_id = %user_id, "Session refers to a missing user");
        }

        Ok(user)
    }
}

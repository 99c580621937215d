//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user.
    ///
    /// Must fail with `AuthError::UserNameTaken` when the name exists,
    /// atomically with respect to concurrent inserts.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by exact user name
    async fn find_by_user_name(&self, user_name: &str) -> AuthResult<Option<User>>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;
}

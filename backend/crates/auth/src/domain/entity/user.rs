//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;

/// Registered user
///
/// `password_hash` never leaves the backend; the GraphQL layer projects
/// users through `UserObject`, which has no such field.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    /// Unique, exact-match login name
    pub user_name: String,
    pub password_hash: HashedPassword,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(user_name: impl Into<String>, password_hash: HashedPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            user_name: user_name.into(),
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

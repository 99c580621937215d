//! Server-side session
//!
//! The cookie only carries a signed session ID; the data lives in a
//! key-value store behind [`SessionStore`].

use std::time::Duration;

use kernel::id::UserId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AuthResult;

/// Data kept server-side for a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    /// Set after a successful register or login
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

impl SessionData {
    pub fn for_user(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }
}

/// Session store trait
#[trait_variant::make(SessionStore: Send)]
pub trait LocalSessionStore {
    /// Load a session, `None` if unknown or expired
    async fn load(&self, session_id: Uuid) -> AuthResult<Option<SessionData>>;

    /// Create or overwrite a session with the given lifetime
    async fn save(&self, session_id: Uuid, data: &SessionData, ttl: Duration) -> AuthResult<()>;

    /// Delete a session (no-op if absent)
    async fn destroy(&self, session_id: Uuid) -> AuthResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_data_json() {
        let user_id = UserId::new();
        let json = serde_json::to_string(&SessionData::for_user(user_id)).unwrap();
        assert_eq!(json, format!("{{\"userId\":\"{}\"}}", user_id));

        let empty: SessionData = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, SessionData::default());
    }
}

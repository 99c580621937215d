//! Redis session store

use std::time::Duration;

use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use uuid::Uuid;

use crate::domain::session::{SessionData, SessionStore};
use crate::error::AuthResult;

/// Key prefix for session entries
const KEY_PREFIX: &str = "sess:";

/// Redis-backed session store
///
/// Sessions are JSON strings under `sess:<uuid>` with a TTL. Reads do not
/// extend the TTL.
#[derive(Clone)]
pub struct RedisSessionStore {
    conn: ConnectionManager,
}

impl RedisSessionStore {
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }

    /// Connect and wrap in a reconnecting connection manager
    pub async fn connect(redis_url: &str) -> AuthResult<Self> {
        let client = redis::Client::open(redis_url)?;
        let conn = ConnectionManager::new(client).await?;
        Ok(Self::new(conn))
    }
}

fn session_key(session_id: Uuid) -> String {
    format!("{KEY_PREFIX}{session_id}")
}

impl SessionStore for RedisSessionStore {
    async fn load(&self, session_id: Uuid) -> AuthResult<Option<SessionData>> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn.get(session_key(session_id)).await?;

        let data = raw
            .map(|json| serde_json::from_str::<SessionData>(&json))
            .transpose()?;

        Ok(data)
    }

    async fn save(&self, session_id: Uuid, data: &SessionData, ttl: Duration) -> AuthResult<()> {
        let json = serde_json::to_string(data)?;
        let mut conn = self.conn.clone();
        // SETEX rejects 0
        let ttl_secs = ttl.as_secs().max(1);

        let _: () = conn.set_ex(session_key(session_id), json, ttl_secs).await?;

        tracing::debug!(session_id = %session_id, ttl_secs, "Session saved");
        Ok(())
    }

    async fn destroy(&self, session_id: Uuid) -> AuthResult<()> {
        let mut conn = self.conn.clone();
        let _: () = conn.del(session_key(session_id)).await?;

        tracing::debug!(session_id = %session_id, "Session destroyed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_key() {
        let id = Uuid::nil();
        assert_eq!(session_key(id), "sess:00000000-0000-0000-0000-000000000000");
    }
}

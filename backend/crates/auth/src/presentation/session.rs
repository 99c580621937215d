//! Per-request session handle
//!
//! Resolvers read and mutate the session through [`RequestSession`]; the
//! HTTP handler persists the result once the operation has run.

use std::sync::{Mutex, PoisonError};

use kernel::id::UserId;
use uuid::Uuid;

use crate::domain::session::SessionData;

#[derive(Debug)]
struct Inner {
    session_id: Option<Uuid>,
    data: SessionData,
    modified: bool,
    destroyed: bool,
}

/// Session attached to one GraphQL request
#[derive(Debug)]
pub struct RequestSession {
    inner: Mutex<Inner>,
}

/// What the handler must do with the session after execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommit {
    /// Nothing changed, or the session was never initialized
    Unchanged,
    /// Store the data and (re)issue the cookie
    Save { session_id: Uuid, data: SessionData },
    /// Remove the stored session and clear the cookie
    Destroy { session_id: Option<Uuid> },
}

impl RequestSession {
    /// Session loaded from the store
    pub fn new(session_id: Uuid, data: SessionData) -> Self {
        Self {
            inner: Mutex::new(Inner {
                session_id: Some(session_id),
                data,
                modified: false,
                destroyed: false,
            }),
        }
    }

    /// Request without a valid session cookie
    pub fn anonymous() -> Self {
        Self {
            inner: Mutex::new(Inner {
                session_id: None,
                data: SessionData::default(),
                modified: false,
                destroyed: false,
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn user_id(&self) -> Option<UserId> {
        let inner = self.lock();
        if inner.destroyed {
            return None;
        }
        inner.data.user_id
    }

    /// Mark the session as belonging to `user_id`
    pub fn set_user_id(&self, user_id: UserId) {
        let mut inner = self.lock();
        inner.data.user_id = Some(user_id);
        inner.modified = true;
        inner.destroyed = false;
    }

    /// Drop the session entirely
    pub fn destroy(&self) {
        let mut inner = self.lock();
        inner.data = SessionData::default();
        inner.modified = false;
        inner.destroyed = true;
    }

    /// Decide how to persist the session. New sessions get a fresh ID.
    pub fn commit(&self) -> SessionCommit {
        let inner = self.lock();

        if inner.destroyed {
            return SessionCommit::Destroy {
                session_id: inner.session_id,
            };
        }

        if !inner.modified {
            return SessionCommit::Unchanged;
        }

        SessionCommit::Save {
            session_id: inner.session_id.unwrap_or_else(Uuid::new_v4),
            data: inner.data.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_session_is_not_saved() {
        assert_eq!(RequestSession::anonymous().commit(), SessionCommit::Unchanged);

        let loaded = RequestSession::new(Uuid::new_v4(), SessionData::for_user(UserId::new()));
        assert_eq!(loaded.commit(), SessionCommit::Unchanged);
    }

    #[test]
    fn test_anonymous_login_creates_session() {
        let session = RequestSession::anonymous();
        let user_id = UserId::new();
        session.set_user_id(user_id);

        assert_eq!(session.user_id(), Some(user_id));
        match session.commit() {
            SessionCommit::Save { data, .. } => assert_eq!(data.user_id, Some(user_id)),
            other => panic!("expected save, got {other:?}"),
        }
    }

    #[test]
    fn test_existing_session_keeps_id() {
        let id = Uuid::new_v4();
        let session = RequestSession::new(id, SessionData::default());
        session.set_user_id(UserId::new());

        assert!(matches!(
            session.commit(),
            SessionCommit::Save { session_id, .. } if session_id == id
        ));
    }

    #[test]
    fn test_destroy() {
        let id = Uuid::new_v4();
        let session = RequestSession::new(id, SessionData::for_user(UserId::new()));
        session.destroy();

        assert_eq!(session.user_id(), None);
        assert_eq!(
            session.commit(),
            SessionCommit::Destroy {
                session_id: Some(id)
            }
        );
    }
}

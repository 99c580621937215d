//! GraphQL DTOs (Data Transfer Objects)

use std::fmt;

use async_graphql::{ID, InputObject, SimpleObject};
use chrono::{DateTime, Utc};

use crate::domain::entity::user::User;
use crate::domain::outcome::AuthOutcome;
use crate::domain::validation::FieldError;
use crate::domain::value_object::credentials::Credentials;

// ============================================================================
// Input
// ============================================================================

/// Username and password, shared by `register` and `login`
#[derive(Clone, InputObject)]
#[graphql(name = "CredentialsInput")]
pub struct CredentialsInput {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for CredentialsInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsInput")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl From<CredentialsInput> for Credentials {
    fn from(input: CredentialsInput) -> Self {
        Credentials::new(input.username, input.password)
    }
}

// ============================================================================
// Output
// ============================================================================

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "FieldError")]
pub struct FieldErrorObject {
    pub field: String,
    pub message: String,
}

impl From<FieldError> for FieldErrorObject {
    fn from(err: FieldError) -> Self {
        Self {
            field: err.field,
            message: err.message,
        }
    }
}

/// Public view of a user. The password hash never leaves the server.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "User")]
pub struct UserObject {
    pub id: ID,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserObject {
    fn from(user: &User) -> Self {
        Self {
            id: ID(user.user_id.to_string()),
            username: user.user_name.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Result of `register` and `login`: `errors` or `user`, never both
#[derive(Debug, Clone, SimpleObject)]
pub struct UserResponse {
    pub errors: Option<Vec<FieldErrorObject>>,
    pub user: Option<UserObject>,
}

impl From<AuthOutcome> for UserResponse {
    fn from(outcome: AuthOutcome) -> Self {
        match outcome {
            AuthOutcome::Authenticated(user) => Self {
                errors: None,
                user: Some(UserObject::from(&user)),
            },
            AuthOutcome::Rejected(errors) => Self {
                errors: Some(errors.into_iter().map(FieldErrorObject::from).collect()),
                user: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::HashedPassword;

    const PHC: &str = "$argon2id$v=19$m=64,t=1,p=1$c29tZXNhbHQ$RdescudvJCsgt3ub+b+dWRWJTmaaJObG";

    #[test]
    fn test_debug_redacts_password() {
        let input = CredentialsInput {
            username: "alice".into(),
            password: "hunter2".into(),
        };
        let debug = format!("{input:?}");
        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_response_from_rejection() {
        let response = UserResponse::from(AuthOutcome::reject(FieldError::username_taken()));
        assert!(response.user.is_none());

        let errors = response.errors.unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "username");
        assert_eq!(errors[0].message, "username already taken");
    }

    #[test]
    fn test_response_from_user() {
        let user = User::new("alice", HashedPassword::from_stored(PHC));
        let response = UserResponse::from(AuthOutcome::Authenticated(user.clone()));

        assert!(response.errors.is_none());
        let object = response.user.unwrap();
        assert_eq!(object.id.as_str(), user.user_id.to_string());
        assert_eq!(object.username, "alice");
    }
}

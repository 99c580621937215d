//! Register / login outcome

use crate::domain::entity::user::User;
use crate::domain::validation::FieldError;

/// Result envelope of register and login
///
/// Either a user or at least one field error, never both.
#[derive(Debug, Clone)]
pub enum AuthOutcome {
    Authenticated(User),
    Rejected(Vec<FieldError>),
}

impl AuthOutcome {
    /// Reject with a single field error
    pub fn reject(error: FieldError) -> Self {
        AuthOutcome::Rejected(vec![error])
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            AuthOutcome::Authenticated(user) => Some(user),
            AuthOutcome::Rejected(_) => None,
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            AuthOutcome::Authenticated(_) => &[],
            AuthOutcome::Rejected(errors) => errors,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthOutcome::Authenticated(_))
    }
}

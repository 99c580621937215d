//! Validation Rules
//!
//! Pure checks over [`Credentials`]. Rules run in order and stop at the
//! first violation, so a request never reports more than one field error.
//!
//! Lengths are UTF-16 code unit counts. Input is not trimmed or normalized.

use crate::domain::value_object::credentials::Credentials;

/// Usernames must be longer than this
pub const USER_NAME_MIN_EXCLUSIVE: usize = 2;

/// Passwords must be longer than this
pub const PASSWORD_MIN_EXCLUSIVE: usize = 3;

pub const FIELD_USERNAME: &str = "username";
pub const FIELD_PASSWORD: &str = "password";

/// A failure attributable to one input field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn username_too_short() -> Self {
        Self::new(
            FIELD_USERNAME,
            format!("length must be greater than {USER_NAME_MIN_EXCLUSIVE}"),
        )
    }

    pub fn password_too_short() -> Self {
        Self::new(
            FIELD_PASSWORD,
            format!("length must be greater than {PASSWORD_MIN_EXCLUSIVE}"),
        )
    }

    pub fn username_taken() -> Self {
        Self::new(FIELD_USERNAME, "username already taken")
    }

    pub fn username_not_found() -> Self {
        Self::new(FIELD_USERNAME, "username doesn't exist")
    }

    pub fn incorrect_password() -> Self {
        Self::new(FIELD_PASSWORD, "incorrect password")
    }
}

/// A single validation rule
pub type Rule = fn(&Credentials) -> Option<FieldError>;

/// Rules applied on registration, in evaluation order
pub const REGISTRATION_RULES: &[Rule] = &[username_length, password_length];

pub fn username_length(credentials: &Credentials) -> Option<FieldError> {
    (credentials.username_len() <= USER_NAME_MIN_EXCLUSIVE)
        .then(FieldError::username_too_short)
}

pub fn password_length(credentials: &Credentials) -> Option<FieldError> {
    (credentials.password_len() <= PASSWORD_MIN_EXCLUSIVE)
        .then(FieldError::password_too_short)
}

/// First rule violation, if any
pub fn first_violation(rules: &[Rule], credentials: &Credentials) -> Option<FieldError> {
    rules.iter().find_map(|rule| rule(credentials))
}

/// Validate registration input
pub fn validate_registration(credentials: &Credentials) -> Option<FieldError> {
    first_violation(REGISTRATION_RULES, credentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_username() {
        for name in ["", "a", "ab"] {
            let err = validate_registration(&Credentials::new(name, "longpassword")).unwrap();
            assert_eq!(err.field, "username");
            assert_eq!(err.message, "length must be greater than 2");
        }
    }

    #[test]
    fn test_short_password() {
        for password in ["", "a", "abc"] {
            let err = validate_registration(&Credentials::new("alice", password)).unwrap();
            assert_eq!(err.field, "password");
            assert_eq!(err.message, "length must be greater than 3");
        }
    }

    #[test]
    fn test_boundaries_pass() {
        assert_eq!(validate_registration(&Credentials::new("abc", "abcd")), None);
    }

    #[test]
    fn test_username_checked_first() {
        let err = validate_registration(&Credentials::new("ab", "pw")).unwrap();
        assert_eq!(err, FieldError::username_too_short());
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        // Three spaces are three characters
        assert_eq!(validate_registration(&Credentials::new("   ", "    ")), None);
    }

    #[test]
    fn test_multibyte_counts_as_one() {
        // "éé" is 4 bytes but 2 code units
        let err = validate_registration(&Credentials::new("éé", "password")).unwrap();
        assert_eq!(err.field, "username");
    }

    #[test]
    fn test_astral_chars_count_as_two_units() {
        assert_eq!(validate_registration(&Credentials::new("😀a", "password123")), None);
        assert_eq!(validate_registration(&Credentials::new("alice", "😀😀")), None);

        let err = validate_registration(&Credentials::new("😀", "password123")).unwrap();
        assert_eq!(err, FieldError::username_too_short());
    }

    #[test]
    fn test_custom_rule_order() {
        let rules: &[Rule] = &[password_length, username_length];
        let err = first_violation(rules, &Credentials::new("ab", "pw")).unwrap();
        assert_eq!(err.field, "password");
    }
}

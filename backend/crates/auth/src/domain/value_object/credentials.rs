//! Credentials Value Object
//!
//! The `{ username, password }` pair supplied with a register or login
//! request. Lives for one request and is never persisted.

use platform::password::ClearTextPassword;

#[derive(Debug)]
pub struct Credentials {
    pub username: String,
    pub password: ClearTextPassword,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: ClearTextPassword::new(password),
        }
    }

    /// Username length in UTF-16 code units
    pub fn username_len(&self) -> usize {
        self.username.encode_utf16().count()
    }

    /// Password length in UTF-16 code units
    pub fn password_len(&self) -> usize {
        self.password.utf16_len()
    }
}

//! Domain Layer
//!
//! Entities, validation rules, and the ports (repository, hasher, session
//! store) the application layer depends on.

pub mod entity;
pub mod hasher;
pub mod outcome;
pub mod repository;
pub mod session;
pub mod validation;
pub mod value_object;

// Re-exports
pub use entity::user::User;
pub use hasher::CredentialHasher;
pub use outcome::AuthOutcome;
pub use repository::UserRepository;
pub use session::{SessionData, SessionStore};
pub use validation::FieldError;
pub use value_object::credentials::Credentials;

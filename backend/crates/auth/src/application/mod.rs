//! Application Layer
//!
//! Use cases and the service facade consumed by the GraphQL layer.

pub mod config;
pub mod current_user;
pub mod login;
pub mod register;
pub mod service;

// Re-exports
pub use config::AuthConfig;
pub use current_user::CurrentUserUseCase;
pub use login::LoginUseCase;
pub use register::RegisterUseCase;
pub use service::{AuthService, Authenticator};

//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, validation rules, repository/hasher/session traits
//! - `application/` - Use cases and the service facade
//! - `infra/` - PostgreSQL, Redis and Argon2 implementations
//! - `presentation/` - GraphQL schema, DTOs, HTTP handler, router
//!
//! ## Features
//! - `register` / `login` mutations with username + password
//! - `me` query and `logout` mutation
//! - Server-side sessions in Redis, referenced by a signed `qid` cookie
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optionally peppered
//! - Plaintext passwords zeroized on drop and redacted in logs
//! - Infrastructure errors reach clients only as a generic message + code

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::service::{AuthService, Authenticator};
pub use error::{AuthError, AuthResult};
pub use infra::{Argon2Hasher, PgUserRepository, RedisSessionStore};
pub use presentation::router::{auth_router, auth_router_generic};

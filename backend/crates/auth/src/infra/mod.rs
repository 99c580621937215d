//! Infrastructure Layer
//!
//! Database, cache and hashing implementations of the domain ports.

pub mod argon2;
pub mod postgres;
pub mod redis;

pub use argon2::Argon2Hasher;
pub use postgres::PgUserRepository;
pub use redis::RedisSessionStore;

//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no domain knowledge:
//! - Password hashing (Argon2id, PHC strings)
//! - HMAC token signing and secure randomness
//! - Cookie building and parsing

pub mod cookie;
pub mod crypto;
pub mod password;

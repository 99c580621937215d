//! Value Object Module

pub mod credentials;

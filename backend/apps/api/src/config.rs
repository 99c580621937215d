//! Server configuration from the environment

use anyhow::{Context, bail};
use auth::AuthConfig;
use base64::Engine;
use base64::engine::general_purpose;

const DEFAULT_PORT: u16 = 4600;
const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1/";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub redis_url: String,
    pub port: u16,
    pub frontend_origins: Vec<String>,
    pub production: bool,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes `std::env::var`
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let database_max_connections = match var("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let port = match var("PORT") {
            Some(raw) => raw.parse().context("PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };

        let redis_url = var("REDIS_URL").unwrap_or_else(|| DEFAULT_REDIS_URL.to_string());

        let frontend_origins = var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        let production = var("APP_ENV").is_some_and(|env| env == "production");

        let auth = if production {
            let secret_b64 =
                var("SESSION_SECRET").context("SESSION_SECRET must be set in production")?;
            AuthConfig::production(decode_secret(&secret_b64)?)
        } else {
            AuthConfig::development()
        };

        Ok(Self {
            database_url,
            database_max_connections,
            redis_url,
            port,
            frontend_origins,
            production,
            auth,
        })
    }
}

/// Decode a base64 session secret of exactly 32 bytes
fn decode_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = general_purpose::STANDARD
        .decode(secret_b64.trim())
        .context("SESSION_SECRET must be base64")?;

    if bytes.len() != 32 {
        bail!("SESSION_SECRET must decode to 32 bytes, got {}", bytes.len());
    }

    let mut secret = [0u8; 32];
    secret.copy_from_slice(&bytes);
    Ok(secret)
}

//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::cookie::CookieConfig;
use platform::password::Argon2Cost;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Ten years, in seconds
const TEN_YEARS: Duration = Duration::from_secs(10 * 365 * 24 * 3600);

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session lifetime, both for the cookie and the stored session
    pub session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Argon2id cost parameters
    pub argon2_cost: Argon2Cost,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "qid".to_string(),
            session_secret: [0u8; 32],
            session_ttl: TEN_YEARS,
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            password_pepper: None,
            argon2_cost: Argon2Cost::default(),
        }
    }
}

impl AuthConfig {
    /// Create config with a random session secret
    pub fn with_random_secret() -> Self {
        Self {
            session_secret: platform::crypto::random_key(),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie, works over plain http)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Create config for production with an externally provided secret
    pub fn production(session_secret: [u8; 32]) -> Self {
        Self {
            session_secret,
            cookie_secure: true,
            ..Default::default()
        }
    }

    /// Cookie attributes for the session cookie
    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.session_ttl.as_secs()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.session_cookie_name, "qid");
        assert_eq!(config.session_ttl.as_secs(), 315_360_000);
        assert!(config.cookie_secure);
        assert_eq!(config.cookie_same_site, SameSite::Lax);
        assert!(config.password_pepper.is_none());
    }

    #[test]
    fn test_development_is_insecure_with_random_secret() {
        let config = AuthConfig::development();
        assert!(!config.cookie_secure);
        assert_ne!(config.session_secret, [0u8; 32]);
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = AuthConfig::production([1u8; 32]).session_cookie();
        let header = cookie.build_set_cookie("token");
        assert!(header.starts_with("qid=token"));
        assert!(header.contains("HttpOnly"));
        assert!(header.contains("Secure"));
        assert!(header.contains("SameSite=Lax"));
        assert!(header.contains("Max-Age=315360000"));
    }
}

// Authentication configuration loaded from environment variables.
// Decision: AUTH_ prefix for all auth config
// Loaded once at startup and passed into constructors; core logic never
// reads the environment.

use std::time::Duration;

/// Session token lifetime when AUTH_TOKEN_LIFETIME is not set: 24 hours
pub const DEFAULT_TOKEN_LIFETIME: Duration = Duration::from_secs(24 * 60 * 60);

/// Complete authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret key for signing session tokens
    pub jwt_secret: String,
    /// Session token lifetime
    pub token_lifetime: Duration,
}

impl AuthConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let jwt_secret = std::env::var("AUTH_JWT_SECRET").unwrap_or_else(|_| {
            // Random per-process secret: tokens won't survive a restart,
            // which is acceptable for local development only
            tracing::warn!("AUTH_JWT_SECRET not set, generating a process-local secret");
            use rand::Rng;
            let bytes: [u8; 32] = rand::thread_rng().gen();
            hex::encode(bytes)
        });

        let token_lifetime = std::env::var("AUTH_TOKEN_LIFETIME")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TOKEN_LIFETIME);

        Self {
            jwt_secret,
            token_lifetime,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_defaults_to_24h() {
        std::env::remove_var("AUTH_TOKEN_LIFETIME");
        let config = AuthConfig::from_env();
        assert_eq!(config.token_lifetime, DEFAULT_TOKEN_LIFETIME);
        assert_eq!(DEFAULT_TOKEN_LIFETIME.as_secs(), 86400);
        assert!(!config.jwt_secret.is_empty());
    }
}

//! Runtime configuration, read from the environment.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub bind_addr: String,
    pub jwt_secret: String,
    pub token_ttl_hours: u64,
    /// Image path rendered into the adoption listing when a pet carries no
    /// uploaded picture.
    pub default_image: String,
    pub csrf_cookie_max_age_seconds: u64,
    /// Disables the Secure cookie attribute for local development.
    pub secure_cookies: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            jwt_secret: "change-me-in-production".to_string(),
            token_ttl_hours: 24,
            default_image: "/assets/images/default-pet.png".to_string(),
            csrf_cookie_max_age_seconds: 3600,
            secure_cookies: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: std::env::var("ADOPTION_BIND_ADDR").unwrap_or(defaults.bind_addr),
            jwt_secret: std::env::var("ADOPTION_JWT_SECRET").unwrap_or(defaults.jwt_secret),
            token_ttl_hours: std::env::var("ADOPTION_TOKEN_TTL_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.token_ttl_hours),
            default_image: std::env::var("ADOPTION_DEFAULT_IMAGE").unwrap_or(defaults.default_image),
            csrf_cookie_max_age_seconds: std::env::var("ADOPTION_CSRF_MAX_AGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.csrf_cookie_max_age_seconds),
            secure_cookies: !std::env::var("APP_ENV")
                .unwrap_or_default()
                .eq_ignore_ascii_case("development"),
        }
    }
}

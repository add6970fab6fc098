use anyhow::Context;

use crate::locale::Locale;

/// Process configuration, read once at startup from the environment
/// (with `.env` support via dotenvy in main).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub default_locale: Locale,
    pub cors_allow_origin: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://tags.db".to_string());

        let default_locale = std::env::var("DEFAULT_LOCALE")
            .ok()
            .as_deref()
            .and_then(Locale::from_accept_language)
            .unwrap_or_default();

        let cors_allow_origin =
            std::env::var("CORS_ALLOW_ORIGIN").unwrap_or_else(|_| "*".to_string());

        Ok(Config {
            host,
            port,
            database_url,
            default_locale,
            cors_allow_origin,
        })
    }
}

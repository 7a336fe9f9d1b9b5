use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Shared secret for HS256 bearer token signatures.
    ///
    /// When unset, token claims are decoded without signature verification and the
    /// issuer must be trusted out-of-band.
    pub token_secret: Option<String>,

    pub session_secure_cookie: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            token_secret: std::env::var("TOKEN_SECRET")
                .ok()
                .filter(|secret| !secret.is_empty()),
            session_secure_cookie: parse_bool_var("SESSION_SECURE_COOKIE", false)?,
        })
    }
}

fn parse_bool_var(name: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(name) {
        Ok(value) => match value.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" => Ok(false),
            _ => Err(ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
        },
        Err(_) => Ok(default),
    }
}

/*
 * Responsibility
 * - Load process configuration from the environment (DATABASE_URL, auth
 *   secret/issuer, CORS origins, forwarded-identity header, ...)
 * - Validate at startup: missing or invalid values fail the boot, not the
 *   first request that needs them
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use axum::http::HeaderName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,
    pub db_max_connections: u32,

    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    pub sqids_min_length: u8,
    pub sqids_alphabet: String,

    /// Shared HMAC-SHA256 secret the auth service signs tokens with.
    /// Must be at least 32 bytes (the HS256 key-strength floor).
    pub auth_jwt_secret: String,
    /// Expected `iss` claim; tokens from any other issuer are ignored.
    pub auth_issuer: String,
    pub access_token_leeway_seconds: u64,

    /// Header carrying a gateway-asserted user id (default `x-user-id`).
    ///
    /// TRUST ASSUMPTION: this header bypasses token verification on the
    /// endpoints that honor it, which is only safe when a trusted perimeter
    /// (gateway/mesh) strips or overwrites it on every inbound request.
    /// Deployments without such a perimeter must set
    /// `FORWARDED_USER_HEADER=` (empty) to disable it; `None` here means
    /// disabled and every endpoint falls back to the verified subject.
    pub forwarded_user_header: Option<HeaderName>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8082);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let db_max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        let app_env = AppEnv::from_env();

        let cors_allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let sqids_min_length: u8 = std::env::var("SQIDS_MIN_LENGTH")
            .ok()
            .map(|v| v.parse().map_err(|_| ConfigError::Invalid("SQIDS_MIN_LENGTH")))
            .transpose()?
            .unwrap_or(10);

        let sqids_alphabet = std::env::var("SQIDS_ALPHABET").unwrap_or_else(|_| {
            "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".to_string()
        });

        let auth_jwt_secret =
            std::env::var("AUTH_JWT_SECRET").map_err(|_| ConfigError::Missing("AUTH_JWT_SECRET"))?;
        // The issuing side refuses HS256 keys under 256 bits; enforce the
        // same floor here so a weak secret fails at boot, not at runtime.
        if auth_jwt_secret.len() < 32 {
            return Err(ConfigError::Invalid("AUTH_JWT_SECRET"));
        }

        let auth_issuer =
            std::env::var("AUTH_ISSUER").map_err(|_| ConfigError::Missing("AUTH_ISSUER"))?;

        let access_token_leeway_seconds = std::env::var("ACCESS_TOKEN_LEEWAY_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);

        let forwarded_user_header =
            parse_forwarded_user_header(std::env::var("FORWARDED_USER_HEADER").ok())?;

        Ok(Self {
            addr,
            database_url,
            db_max_connections,
            app_env,
            cors_allowed_origins,
            sqids_min_length,
            sqids_alphabet,
            auth_jwt_secret,
            auth_issuer,
            access_token_leeway_seconds,
            forwarded_user_header,
        })
    }
}

/// Unset -> default `x-user-id`; blank -> disabled; otherwise the value is
/// normalized to lowercase and must be a valid header name.
fn parse_forwarded_user_header(
    raw: Option<String>,
) -> Result<Option<HeaderName>, ConfigError> {
    match raw {
        None => Ok(Some(HeaderName::from_static("x-user-id"))),
        Some(v) if v.trim().is_empty() => Ok(None),
        Some(v) => HeaderName::try_from(v.trim().to_ascii_lowercase())
            .map(Some)
            .map_err(|_| ConfigError::Invalid("FORWARDED_USER_HEADER")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwarded_header_defaults_to_x_user_id() {
        let header = parse_forwarded_user_header(None).unwrap();
        assert_eq!(header.unwrap().as_str(), "x-user-id");
    }

    #[test]
    fn blank_forwarded_header_disables_the_override() {
        assert!(parse_forwarded_user_header(Some(String::new())).unwrap().is_none());
        assert!(parse_forwarded_user_header(Some("   ".into())).unwrap().is_none());
    }

    #[test]
    fn forwarded_header_is_lowercased() {
        let header = parse_forwarded_user_header(Some("X-Acting-User".into())).unwrap();
        assert_eq!(header.unwrap().as_str(), "x-acting-user");
    }

    #[test]
    fn invalid_forwarded_header_is_rejected() {
        assert!(parse_forwarded_user_header(Some("not a header".into())).is_err());
    }
}

//! 애플리케이션 설정
//! Application configuration loaded from the process environment.
//!
//! `JWT_SECRET` and `DATABASE_URL` have no defaults: a missing signing secret
//! aborts startup instead of falling back to a built-in key.

use std::fmt;
use std::net::SocketAddr;

use axum::http::HeaderValue;
use thiserror::Error;

pub const ENV_JWT_SECRET: &str = "JWT_SECRET";
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_CORS_ORIGINS: &str = "CORS_ORIGINS";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3002";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// HS256 키 최소 길이 (바이트)
pub const MIN_SECRET_LEN: usize = 32;

/// 설정 에러
/// Configuration errors (all fatal at startup)
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("JWT_SECRET must be at least 32 bytes (got {len})")]
    SecretTooShort { len: usize },

    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

#[derive(Clone)]
pub struct AppConfig {
    pub jwt_secret: String,
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub cors_origins: Vec<HeaderValue>,
}

// 시크릿과 DB 접속 정보는 로그에 남기지 않음
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("jwt_secret", &"<redacted>")
            .field("database_url", &"<redacted>")
            .field("bind_addr", &self.bind_addr)
            .field("cors_origins", &self.cors_origins)
            .finish()
    }
}

impl AppConfig {
    /// 환경 변수에서 설정 로드
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let jwt_secret = non_empty(ENV_JWT_SECRET).ok_or(ConfigError::Missing(ENV_JWT_SECRET))?;
        if jwt_secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::SecretTooShort { len: jwt_secret.len() });
        }

        let database_url = non_empty(ENV_DATABASE_URL).ok_or(ConfigError::Missing(ENV_DATABASE_URL))?;

        let bind_addr = non_empty(ENV_BIND_ADDR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                key: ENV_BIND_ADDR,
                reason: e.to_string(),
            })?;

        let cors_origins = parse_origins(
            &non_empty(ENV_CORS_ORIGINS).unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
        )?;

        Ok(Self {
            jwt_secret,
            database_url,
            bind_addr,
            cors_origins,
        })
    }
}

/// 쉼표로 구분된 CORS 허용 목록 파싱
fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            if !(origin.starts_with("http://") || origin.starts_with("https://")) {
                return Err(ConfigError::InvalidValue {
                    key: ENV_CORS_ORIGINS,
                    reason: format!("origin must start with http:// or https://: {origin}"),
                });
            }
            origin.parse::<HeaderValue>().map_err(|e| ConfigError::InvalidValue {
                key: ENV_CORS_ORIGINS,
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if origins.is_empty() {
        return Err(ConfigError::InvalidValue {
            key: ENV_CORS_ORIGINS,
            reason: "at least one origin is required".to_string(),
        });
    }

    Ok(origins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_secret_is_fatal() {
        let result = AppConfig::from_lookup(lookup(&[(ENV_DATABASE_URL, "postgres://localhost/db")]));
        assert_eq!(result.unwrap_err(), ConfigError::Missing(ENV_JWT_SECRET));
    }

    #[test]
    fn test_blank_secret_counts_as_missing() {
        let result = AppConfig::from_lookup(lookup(&[
            (ENV_JWT_SECRET, "   "),
            (ENV_DATABASE_URL, "postgres://localhost/db"),
        ]));
        assert_eq!(result.unwrap_err(), ConfigError::Missing(ENV_JWT_SECRET));
    }

    #[test]
    fn test_short_secret_rejected() {
        let result = AppConfig::from_lookup(lookup(&[
            (ENV_JWT_SECRET, "short"),
            (ENV_DATABASE_URL, "postgres://localhost/db"),
        ]));
        assert_eq!(result.unwrap_err(), ConfigError::SecretTooShort { len: 5 });
    }

    #[test]
    fn test_defaults_applied() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_JWT_SECRET, SECRET),
            (ENV_DATABASE_URL, "postgres://localhost/db"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(config.cors_origins, vec![HeaderValue::from_static(DEFAULT_CORS_ORIGIN)]);
        assert!(!format!("{config:?}").contains(SECRET));
    }

    #[test]
    fn test_cors_allowlist_parsed() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_JWT_SECRET, SECRET),
            (ENV_DATABASE_URL, "postgres://localhost/db"),
            (ENV_CORS_ORIGINS, "https://app.example.com, http://localhost:5173"),
        ]))
        .unwrap();

        assert_eq!(config.cors_origins.len(), 2);
        assert_eq!(config.cors_origins[1], HeaderValue::from_static("http://localhost:5173"));
    }

    #[test]
    fn test_invalid_origin_rejected() {
        let result = AppConfig::from_lookup(lookup(&[
            (ENV_JWT_SECRET, SECRET),
            (ENV_DATABASE_URL, "postgres://localhost/db"),
            (ENV_CORS_ORIGINS, "localhost:3000"),
        ]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key: ENV_CORS_ORIGINS, .. })
        ));
    }
}

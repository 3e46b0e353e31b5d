use std::fmt;

use axum::http::HeaderValue;
use thiserror::Error;

use crate::content::CONTACT_EMAIL;

pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";
pub const DEFAULT_INBOX_CAPACITY: usize = 500;
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid CORS origin {0:?}")]
    InvalidOrigin(String),
    #[error("CONTACT_INBOX_CAPACITY must be a positive integer, got {0:?}")]
    InvalidCapacity(String),
    #[error("invalid mail address {0:?}")]
    InvalidAddress(String),
    #[error("invalid SMTP relay {host:?}: {reason}")]
    InvalidSmtpHost { host: String, reason: String },
}

/// Credentials for the notification mail. Present only when both
/// `SMTP_EMAIL` and `SMTP_PASSWORD` are set.
#[derive(Clone)]
pub struct SmtpConfig {
    pub username: String,
    pub password: String,
    pub recipient: String,
    pub host: String,
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("username", &self.username)
            .field("password", &"***")
            .field("recipient", &self.recipient)
            .field("host", &self.host)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub cors_origins: Vec<HeaderValue>,
    pub inbox_capacity: usize,
    pub smtp: Option<SmtpConfig>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let cors_origins = parse_origins(
            var("CORS_ORIGINS")
                .as_deref()
                .unwrap_or(DEFAULT_CORS_ORIGINS),
        )?;

        let inbox_capacity = match var("CONTACT_INBOX_CAPACITY") {
            None => DEFAULT_INBOX_CAPACITY,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidCapacity(raw)),
            },
        };

        let smtp = match (var("SMTP_EMAIL"), var("SMTP_PASSWORD")) {
            (Some(username), Some(password)) => Some(SmtpConfig {
                username: username.trim().to_string(),
                password,
                recipient: var("RECIPIENT_EMAIL")
                    .map(|r| r.trim().to_string())
                    .unwrap_or_else(|| CONTACT_EMAIL.to_string()),
                host: var("SMTP_HOST")
                    .map(|h| h.trim().to_string())
                    .unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            }),
            _ => None,
        };

        Ok(Self {
            cors_origins,
            inbox_capacity,
            smtp,
        })
    }
}

fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| HeaderValue::from_str(s).map_err(|_| ConfigError::InvalidOrigin(s.to_string())))
        .collect()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            cors_origins: DEFAULT_CORS_ORIGINS
                .split(',')
                .map(HeaderValue::from_static)
                .collect(),
            inbox_capacity: DEFAULT_INBOX_CAPACITY,
            smtp: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:3000", "http://127.0.0.1:3000"]
        );
        assert_eq!(config.inbox_capacity, DEFAULT_INBOX_CAPACITY);
        assert!(config.smtp.is_none());
        assert_eq!(config.cors_origins, ServerConfig::default().cors_origins);
    }

    #[test]
    fn test_origin_list() {
        let config = from_pairs(&[
            ("CORS_ORIGINS", "https://a.dev, https://b.dev,"),
            ("CONTACT_INBOX_CAPACITY", "10"),
        ])
        .unwrap();
        assert_eq!(config.cors_origins, vec!["https://a.dev", "https://b.dev"]);
        assert_eq!(config.inbox_capacity, 10);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            from_pairs(&[("CORS_ORIGINS", "bad\norigin")]),
            Err(ConfigError::InvalidOrigin(_))
        ));
        assert!(matches!(
            from_pairs(&[("CONTACT_INBOX_CAPACITY", "0")]),
            Err(ConfigError::InvalidCapacity(_))
        ));
        assert!(matches!(
            from_pairs(&[("CONTACT_INBOX_CAPACITY", "many")]),
            Err(ConfigError::InvalidCapacity(_))
        ));
    }

    #[test]
    fn test_smtp_needs_both_credentials() {
        let config = from_pairs(&[("SMTP_EMAIL", "me@gmail.com")]).unwrap();
        assert!(config.smtp.is_none());
        let config =
            from_pairs(&[("SMTP_EMAIL", "me@gmail.com"), ("SMTP_PASSWORD", "  ")]).unwrap();
        assert!(config.smtp.is_none());
    }

    #[test]
    fn test_smtp_defaults() {
        let config = from_pairs(&[("SMTP_EMAIL", "me@gmail.com"), ("SMTP_PASSWORD", "app-pass")])
            .unwrap();
        let smtp = config.smtp.unwrap();
        assert_eq!(smtp.username, "me@gmail.com");
        assert_eq!(smtp.recipient, CONTACT_EMAIL);
        assert_eq!(smtp.host, DEFAULT_SMTP_HOST);
        assert!(!format!("{smtp:?}").contains("app-pass"));
    }

    #[test]
    fn test_smtp_overrides() {
        let config = from_pairs(&[
            ("SMTP_EMAIL", "me@gmail.com"),
            ("SMTP_PASSWORD", "app-pass"),
            ("RECIPIENT_EMAIL", "owner@example.com"),
            ("SMTP_HOST", "smtp.example.com"),
        ])
        .unwrap();
        let smtp = config.smtp.unwrap();
        assert_eq!(smtp.recipient, "owner@example.com");
        assert_eq!(smtp.host, "smtp.example.com");
    }
}

//! Client configuration (environment variables with defaults).

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://mini-ecomm-server.onrender.com";

const API_URL_ENV: &str = "CATALOG_API_URL";
const QUERY_ENCODING_ENV: &str = "CATALOG_QUERY_ENCODING";
const TIMEOUT_ENV: &str = "CATALOG_REQUEST_TIMEOUT_SECS";

/// How search text is placed into `/api/search?query=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryEncoding {
    /// Interpolate the text as typed. Characters such as `&` or `#` change
    /// the meaning of the URL; kept for compatibility with existing services.
    #[default]
    Raw,
    /// Form-encode the text as a single query parameter.
    Percent,
}

impl core::str::FromStr for QueryEncoding {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(QueryEncoding::Raw),
            "percent" | "encoded" => Ok(QueryEncoding::Percent),
            other => Err(ConfigError::QueryEncoding(other.to_string())),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid query encoding '{0}'; expected raw or percent")]
    QueryEncoding(String),
    #[error("invalid request timeout '{0}'; expected whole seconds")]
    Timeout(String),
    #[error("API URL must start with http:// or https://, got '{0}'")]
    ApiUrl(String),
}

/// Where and how to reach the Product Service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub query_encoding: QueryEncoding,
    /// `None` leaves requests without a deadline.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            query_encoding: QueryEncoding::default(),
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    /// Read `CATALOG_API_URL`, `CATALOG_QUERY_ENCODING` and
    /// `CATALOG_REQUEST_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`ClientConfig::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config = config.with_api_url(url)?;
        }

        if let Some(encoding) = lookup(QUERY_ENCODING_ENV).filter(|v| !v.trim().is_empty()) {
            config.query_encoding = encoding.parse()?;
        }

        if let Some(secs) = lookup(TIMEOUT_ENV).filter(|v| !v.trim().is_empty()) {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|_| ConfigError::Timeout(secs.clone()))?;
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Trailing slashes are dropped so paths can be appended verbatim.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::ApiUrl(url));
        }
        self.api_url = trimmed.to_string();
        Ok(self)
    }

    pub fn with_query_encoding(mut self, encoding: QueryEncoding) -> Self {
        self.query_encoding = encoding;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.query_encoding, QueryEncoding::Raw);
        assert_eq!(config.request_timeout, None);
    }

    #[test]
    fn reads_all_variables() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("CATALOG_API_URL", "http://localhost:5000/"),
            ("CATALOG_QUERY_ENCODING", "percent"),
            ("CATALOG_REQUEST_TIMEOUT_SECS", "15"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "http://localhost:5000");
        assert_eq!(config.query_encoding, QueryEncoding::Percent);
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            ClientConfig::from_lookup(lookup(&[("CATALOG_QUERY_ENCODING", "base64")])).unwrap_err(),
            ConfigError::QueryEncoding("base64".to_string())
        );
        assert_eq!(
            ClientConfig::from_lookup(lookup(&[("CATALOG_REQUEST_TIMEOUT_SECS", "soon")]))
                .unwrap_err(),
            ConfigError::Timeout("soon".to_string())
        );
        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[("CATALOG_API_URL", "localhost:5000")])),
            Err(ConfigError::ApiUrl(_))
        ));
    }

    #[test]
    fn blank_variables_are_ignored() {
        let config =
            ClientConfig::from_lookup(lookup(&[("CATALOG_API_URL", "  "), ("CATALOG_QUERY_ENCODING", "")]))
                .unwrap();
        assert_eq!(config, ClientConfig::default());
    }
}

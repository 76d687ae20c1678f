//! Agent configuration

use std::{net::SocketAddr, time::Duration};

use anyhow::{Context, Result};
use url::Url;

/// Default JSearch search endpoint
pub const DEFAULT_PROVIDER_URL: &str = "https://jsearch.p.rapidapi.com/search";

/// Default RapidAPI host header value
pub const DEFAULT_PROVIDER_HOST: &str = "jsearch.p.rapidapi.com";

/// Configuration for the job provider client
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Search endpoint
    pub base_url: Url,

    /// API key; `None` selects the mock provider
    pub api_key: Option<String>,

    /// Value of the `X-RapidAPI-Host` header
    pub api_host: String,

    /// Upper bound for one provider call
    pub timeout: Duration,
}

impl ProviderConfig {
    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_PROVIDER_URL).expect("default provider URL is valid"),
            api_key: None,
            api_host: DEFAULT_PROVIDER_HOST.to_string(),
            timeout: Duration::from_secs(15),
        }
    }
}

/// Configuration for the agent process
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Interface to bind
    pub host: String,

    pub port: u16,

    pub provider: ProviderConfig,

    /// Include error source chains in internal error envelopes
    pub debug: bool,

    /// Default tracing filter when `RUST_LOG` is unset
    pub rust_log: String,
}

impl AgentConfig {
    /// Load configuration from the environment, reading `.env` if present
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let mut provider = ProviderConfig::default();

        if let Some(url) = optional_env("JSEARCH_BASE_URL") {
            provider.base_url = Url::parse(&url)
                .with_context(|| format!("JSEARCH_BASE_URL is not a valid URL: '{url}'"))?;
        }
        provider.api_key = optional_env("JSEARCH_API_KEY");
        if let Some(host) = optional_env("JSEARCH_HOST") {
            provider.api_host = host;
        }
        if let Some(secs) = optional_env("JSEARCH_TIMEOUT_SECS") {
            let secs = secs
                .parse::<u64>()
                .context("JSEARCH_TIMEOUT_SECS must be a whole number of seconds")?;
            provider.timeout = Duration::from_secs(secs);
        }

        Ok(Self {
            host: optional_env("HOST").unwrap_or(defaults.host),
            port: match optional_env("PORT") {
                Some(port) => port.parse::<u16>().context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            provider,
            debug: optional_env("A2A_DEBUG")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }

    /// Socket address to listen on
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .with_context(|| format!("Invalid bind address {addr}"))
    }

    /// Set the provider configuration
    pub fn with_provider(mut self, provider: ProviderConfig) -> Self {
        self.provider = provider;
        self
    }

    /// Enable or disable debug error traces
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5002,
            provider: ProviderConfig::default(),
            debug: false,
            rust_log: "info".to_string(),
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AgentConfig::default();
        assert_eq!(config.port, 5002);
        assert!(!config.debug);
        assert!(config.provider.api_key.is_none());
        assert_eq!(config.provider.base_url.as_str(), DEFAULT_PROVIDER_URL);
        assert_eq!(config.provider.timeout, Duration::from_secs(15));
        assert_eq!(config.bind_addr().unwrap().port(), 5002);
    }

    #[test]
    fn test_builders() {
        let config = AgentConfig::default()
            .with_debug(true)
            .with_provider(
                ProviderConfig::default()
                    .with_api_key("k")
                    .with_timeout(Duration::from_secs(3)),
            );

        assert!(config.debug);
        assert_eq!(config.provider.api_key.as_deref(), Some("k"));
        assert_eq!(config.provider.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_bind_addr() {
        let config = AgentConfig {
            host: "not a host".into(),
            ..AgentConfig::default()
        };
        assert!(config.bind_addr().is_err());
    }
}

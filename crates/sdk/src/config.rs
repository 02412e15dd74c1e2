//! Configuration types for the Patchwork SDK.

use std::time::Duration;
use url::Url;

/// Default base URL of the Patchwork API, including the version prefix.
pub const DEFAULT_BASE_URL: &str = "https://api.patchwork.dev/v1alpha/";

/// Configuration for the Patchwork client.
///
/// Built once at startup and shared read-only between all requests. The
/// API key is mandatory; a client cannot be constructed without one.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Patchwork API. Resource paths are joined onto this,
    /// so it must end with a trailing slash.
    pub base_url: Url,
    /// API key sent on every request.
    pub api_key: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration with the given base URL and API key.
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            base_url,
            api_key: api_key.into(),
            timeout: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url_parses() {
        let url = Url::parse(DEFAULT_BASE_URL).unwrap();
        assert!(url.path().ends_with('/'));
    }

    #[test]
    fn test_client_config_defaults() {
        let url = Url::parse(DEFAULT_BASE_URL).unwrap();
        let config = ClientConfig::new(url, "pk-test");

        assert_eq!(config.api_key, "pk-test");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}

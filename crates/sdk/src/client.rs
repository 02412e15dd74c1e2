//! Main client for the Patchwork SDK.

use crate::api::{ActivitiesApi, SessionsApi, SourcesApi};
use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::error::{PatchworkError, PatchworkResult};
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Client for the Patchwork API.
///
/// Cheap to clone; all clones share one HTTP connection pool and the
/// read-only configuration established at construction.
#[derive(Clone)]
pub struct PatchworkClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl PatchworkClient {
    /// Create a new client builder.
    pub fn builder() -> PatchworkClientBuilder {
        PatchworkClientBuilder::new()
    }

    fn from_config(config: ClientConfig) -> PatchworkResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// Get the sources API.
    pub fn sources(&self) -> SourcesApi<'_> {
        SourcesApi::new(self)
    }

    /// Get the sessions API.
    pub fn sessions(&self) -> SessionsApi<'_> {
        SessionsApi::new(self)
    }

    /// Get the activities API.
    pub fn activities(&self) -> ActivitiesApi<'_> {
        ActivitiesApi::new(self)
    }
}

/// Builder for creating a [`PatchworkClient`].
pub struct PatchworkClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Duration,
}

impl PatchworkClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Override the base URL (defaults to the hosted Patchwork API).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key. Required.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> PatchworkResult<PatchworkClient> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| PatchworkError::Config("api_key is required".to_string()))?;

        let base_url_str = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let mut base_url = Url::parse(&base_url_str)?;

        // Resource paths are joined relative to the base, so the path must
        // end with a slash or the last segment would be replaced.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let mut config = ClientConfig::new(base_url, api_key);
        config.timeout = self.timeout;

        PatchworkClient::from_config(config)
    }
}

impl Default for PatchworkClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_api_key() {
        let result = PatchworkClient::builder().build();
        assert!(matches!(result, Err(PatchworkError::Config(_))));

        let result = PatchworkClient::builder().api_key("").build();
        assert!(matches!(result, Err(PatchworkError::Config(_))));
    }

    #[test]
    fn test_builder_defaults_to_hosted_api() {
        let client = PatchworkClient::builder().api_key("pk-test").build().unwrap();
        assert_eq!(client.base_url().as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_builder_normalizes_trailing_slash() {
        let client = PatchworkClient::builder()
            .base_url("http://localhost:8080/v1alpha")
            .api_key("pk-test")
            .build()
            .unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8080/v1alpha/");
    }

    #[test]
    fn test_builder_rejects_bad_url() {
        let result = PatchworkClient::builder()
            .base_url("not a url")
            .api_key("pk-test")
            .build();
        assert!(matches!(result, Err(PatchworkError::InvalidUrl(_))));
    }
}

//! HTTP transport for the Patchwork SDK.
//!
//! One authenticated `reqwest::Client`, built once from configuration.
//! Every operation issues exactly one upstream request; transient failures
//! surface immediately to the caller, which owns any retry decision.

use crate::config::ClientConfig;
use crate::error::{PatchworkError, PatchworkResult};
use reqwest::{header, Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Header carrying the API key on every request.
pub(crate) const API_KEY_HEADER: &str = "x-api-key";

/// HTTP transport for making API requests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new transport from the given configuration.
    ///
    /// Fails with a configuration error when the API key is empty.
    pub fn new(config: Arc<ClientConfig>) -> PatchworkResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(PatchworkError::Config(
                "API key must not be empty".to_string(),
            ));
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::HeaderName::from_static(API_KEY_HEADER),
            header::HeaderValue::from_str(&config.api_key)
                .map_err(|_| PatchworkError::Config("invalid API key format".to_string()))?,
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Join a relative resource path onto the configured base URL.
    ///
    /// Paths are relative (no leading slash) so the versioned prefix in the
    /// base URL survives the join.
    fn build_url(&self, path: &str) -> PatchworkResult<url::Url> {
        Ok(self.config.base_url.join(path)?)
    }

    /// Send a request and classify the response.
    async fn send(&self, request: RequestBuilder) -> PatchworkResult<Response> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(PatchworkError::from_response(status.as_u16(), &body))
    }

    /// Decode a JSON response body.
    async fn decode<T: DeserializeOwned>(response: Response) -> PatchworkResult<T> {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Execute a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> PatchworkResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request");

        let response = self.send(self.client.get(url)).await?;
        Self::decode(response).await
    }

    /// Execute a GET request with query parameters.
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> PatchworkResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request with query");

        let response = self.send(self.client.get(url).query(query)).await?;
        Self::decode(response).await
    }

    /// Execute a POST request.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> PatchworkResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "POST request");

        let response = self.send(self.client.post(url).json(body)).await?;
        Self::decode(response).await
    }

    /// Execute a POST request whose success body is empty (verb-style RPCs).
    pub async fn post_empty<B: Serialize>(&self, path: &str, body: &B) -> PatchworkResult<()> {
        let url = self.build_url(path)?;
        debug!(url = %url, "POST request (empty response)");

        self.send(self.client.post(url).json(body)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::time::Duration;
    use url::Url;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestResponse {
        message: String,
        value: i32,
    }

    #[derive(Debug, Serialize)]
    struct TestRequest {
        name: String,
    }

    fn create_config(base_url: &str, api_key: &str) -> Arc<ClientConfig> {
        let mut url = Url::parse(base_url).unwrap();
        if !url.path().ends_with('/') {
            url.set_path(&format!("{}/", url.path()));
        }
        Arc::new(ClientConfig::new(url, api_key))
    }

    #[tokio::test]
    async fn test_get_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sessions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                message: "success".to_string(),
                value: 42,
            }))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri(), "pk-test")).unwrap();

        let result: TestResponse = transport.get("sessions").await.unwrap();
        assert_eq!(result.message, "success");
        assert_eq!(result.value, 42);
    }

    #[tokio::test]
    async fn test_get_with_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sessions"))
            .and(query_param("pageSize", "30"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                message: "paged".to_string(),
                value: 30,
            }))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri(), "pk-test")).unwrap();

        let result: TestResponse = transport
            .get_with_query("sessions", &[("pageSize", "30")])
            .await
            .unwrap();
        assert_eq!(result.message, "paged");
    }

    #[tokio::test]
    async fn test_post_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/sessions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                message: "created".to_string(),
                value: 1,
            }))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri(), "pk-test")).unwrap();

        let request = TestRequest {
            name: "test".to_string(),
        };
        let result: TestResponse = transport.post("sessions", &request).await.unwrap();
        assert_eq!(result.message, "created");
    }

    #[tokio::test]
    async fn test_post_empty_ignores_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/sessions/abc:approvePlan"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri(), "pk-test")).unwrap();

        transport
            .post_empty("sessions/abc:approvePlan", &serde_json::json!({}))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_api_key_header_attached() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sessions"))
            .and(header("x-api-key", "pk-secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                message: "authorized".to_string(),
                value: 100,
            }))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri(), "pk-secret")).unwrap();

        let result: TestResponse = transport.get("sessions").await.unwrap();
        assert_eq!(result.message, "authorized");
    }

    #[tokio::test]
    async fn test_empty_api_key_rejected() {
        let result = HttpTransport::new(create_config("http://localhost:9", "  "));
        assert!(matches!(result, Err(PatchworkError::Config(_))));
    }

    #[tokio::test]
    async fn test_404_maps_to_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sessions/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "error": {"code": 404, "message": "session not found", "status": "NOT_FOUND"}
            })))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri(), "pk-test")).unwrap();

        let result: PatchworkResult<TestResponse> = transport.get("sessions/missing").await;
        match result {
            Err(PatchworkError::NotFound(message)) => assert_eq!(message, "session not found"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_401_maps_to_unauthenticated() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sources"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri(), "pk-wrong")).unwrap();

        let result: PatchworkResult<TestResponse> = transport.get("sources").await;
        assert!(matches!(result, Err(PatchworkError::Unauthenticated(_))));
    }

    #[tokio::test]
    async fn test_500_maps_to_upstream() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sessions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri(), "pk-test")).unwrap();

        let result: PatchworkResult<TestResponse> = transport.get("sessions").await;
        match result {
            Err(PatchworkError::Upstream { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_timeout_maps_to_transport_with_single_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sessions"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .expect(1)
            .mount(&server)
            .await;

        let mut config = ClientConfig::new(
            Url::parse(&format!("{}/", server.uri())).unwrap(),
            "pk-test",
        );
        config.timeout = Duration::from_millis(100);
        let transport = HttpTransport::new(Arc::new(config)).unwrap();

        let result: PatchworkResult<TestResponse> = transport.get("sessions").await;
        assert!(matches!(result, Err(PatchworkError::Transport(_))));
        // Mock expectation of exactly one received request is verified on drop.
    }

    #[tokio::test]
    async fn test_build_url_keeps_version_prefix() {
        let config = create_config("http://localhost:8080/v1alpha/", "pk-test");
        let transport = HttpTransport::new(config).unwrap();

        let url = transport.build_url("sessions/abc123").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v1alpha/sessions/abc123");

        let url = transport.build_url("sessions/abc123:sendMessage").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/v1alpha/sessions/abc123:sendMessage"
        );
    }
}

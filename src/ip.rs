//! Public IP resolution.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::time::Duration;

/// Default IP echo service. Responds with `{"ip": "<address>"}`.
pub const DEFAULT_IP_SERVICE: &str = "https://jsonip.com";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolver for the current machine's global IP.
pub struct IpResolver {
    client: reqwest::Client,
    url: String,
}

#[derive(Debug, Deserialize)]
struct IpResponse {
    ip: String,
}

impl IpResolver {
    /// Create a resolver against the default echo service.
    pub fn new() -> Self {
        Self::with_url(DEFAULT_IP_SERVICE, DEFAULT_TIMEOUT)
    }

    /// Create a resolver against a custom echo service.
    pub fn with_url(url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            url: url.into(),
        }
    }

    /// Get the current machine's global IP. One request, no fallback chain.
    pub async fn get_global_ip(&self) -> Result<String> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Network(format!(
                "HTTP {} from {}",
                response.status(),
                self.url
            )));
        }

        let text = response.text().await?;
        let parsed: IpResponse = serde_json::from_str(&text)?;

        tracing::debug!("Resolved global IP {} via {}", parsed.ip, self.url);
        Ok(parsed.ip)
    }
}

impl Default for IpResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_global_ip_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ip":"93.184.216.34"}"#))
            .mount(&mock_server)
            .await;

        let resolver = IpResolver::with_url(mock_server.uri(), DEFAULT_TIMEOUT);
        let ip = resolver.get_global_ip().await.unwrap();

        assert_eq!(ip, "93.184.216.34");
    }

    #[tokio::test]
    async fn test_get_global_ip_rejects_non_json_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("93.184.216.34"))
            .mount(&mock_server)
            .await;

        let resolver = IpResolver::with_url(mock_server.uri(), DEFAULT_TIMEOUT);
        let err = resolver.get_global_ip().await.unwrap_err();

        assert!(matches!(err, Error::Format(_)));
    }

    #[tokio::test]
    async fn test_get_global_ip_rejects_missing_field() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"address":"1.2.3.4"}"#))
            .mount(&mock_server)
            .await;

        let resolver = IpResolver::with_url(mock_server.uri(), DEFAULT_TIMEOUT);
        let err = resolver.get_global_ip().await.unwrap_err();

        assert!(matches!(err, Error::Format(_)));
    }

    #[tokio::test]
    async fn test_get_global_ip_http_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let resolver = IpResolver::with_url(mock_server.uri(), DEFAULT_TIMEOUT);
        let err = resolver.get_global_ip().await.unwrap_err();

        assert!(matches!(err, Error::Network(_)));
    }
}

//! Hosted DNS provider API client.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::record::ChangeBatch;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A hosted zone as listed by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostedZone {
    /// Opaque provider-assigned identifier.
    #[serde(rename = "Id")]
    pub id: String,
    /// Dotted zone apex, absolute form (e.g. `"example.com."`).
    #[serde(rename = "Name")]
    pub name: String,
}

/// Provider acknowledgement for a submitted change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeInfo {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "SubmittedAt")]
    pub submitted_at: DateTime<Utc>,
}

/// Capability handle for the provider's zone and record-set API.
///
/// Passed explicitly into zone resolution and record submission; credentials
/// live behind the implementation, not in the callers.
#[async_trait]
pub trait DnsApi: Send + Sync {
    /// List all hosted zones visible to the caller's credentials.
    async fn list_hosted_zones(&self) -> Result<Vec<HostedZone>>;

    /// Apply a change batch to a zone's record sets.
    async fn change_record_sets(&self, zone_id: &str, change: &ChangeBatch) -> Result<ChangeInfo>;
}

#[derive(Debug, Deserialize)]
struct ListHostedZonesResponse {
    #[serde(rename = "HostedZones")]
    hosted_zones: Vec<HostedZone>,
}

#[derive(Debug, Deserialize)]
struct ChangeResponse {
    #[serde(rename = "ChangeInfo")]
    change_info: ChangeInfo,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// HTTP client for the provider API.
#[derive(Debug)]
pub struct HttpDnsApi {
    client: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl HttpDnsApi {
    /// Build a client from configuration, resolving the ambient credential.
    pub fn from_config(config: &Config) -> Result<Self> {
        if config.endpoint.is_empty() {
            return Err(Error::Config(
                "provider endpoint is not set; add `endpoint` to the config file".to_string(),
            ));
        }

        Ok(Self::with_base_url(
            config.endpoint.clone(),
            config.resolved_api_token(),
            config.timeout(),
        ))
    }

    /// Create with an explicit base URL (also the test seam).
    pub fn with_base_url(base_url: String, api_token: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            api_token,
        }
    }

    /// Pass a successful response through, map everything else to the
    /// provider error verbatim.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|e| e.message)
            .unwrap_or(body);

        Err(Error::Provider {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl DnsApi for HttpDnsApi {
    async fn list_hosted_zones(&self) -> Result<Vec<HostedZone>> {
        let url = format!("{}/hostedzones", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .send()
            .await?;
        let response = Self::check(response).await?;

        let text = response.text().await?;
        let parsed: ListHostedZonesResponse = serde_json::from_str(&text)?;

        tracing::debug!("Listed {} hosted zones", parsed.hosted_zones.len());
        Ok(parsed.hosted_zones)
    }

    async fn change_record_sets(&self, zone_id: &str, change: &ChangeBatch) -> Result<ChangeInfo> {
        let url = format!("{}/hostedzones/{}/rrset", self.base_url, zone_id);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .json(change)
            .send()
            .await?;
        let response = Self::check(response).await?;

        let text = response.text().await?;
        let parsed: ChangeResponse = serde_json::from_str(&text)?;

        Ok(parsed.change_info)
    }
}

use crate::config::MetadataConfig;
use crate::errors::{ProbeError, ProbeResult};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Well-known metadata path answered only inside EC2
const AMI_ID_PATH: &str = "/latest/metadata/ami-id";

/// Transport seam for the confirmation probe.
///
/// Production code uses `MetadataClient`; test code substitutes stub
/// implementations with scripted responses.
#[async_trait]
pub trait MetadataTransport: Send + Sync {
    /// Issue the metadata GET and return the HTTP status code.
    /// The response body is never inspected.
    async fn fetch_ami_id_status(&self) -> ProbeResult<u16>;
}

#[async_trait]
impl<T: MetadataTransport + ?Sized> MetadataTransport for Arc<T> {
    async fn fetch_ami_id_status(&self) -> ProbeResult<u16> {
        (**self).fetch_ami_id_status().await
    }
}

/// HTTP client for the EC2 metadata endpoint
pub struct MetadataClient {
    http: reqwest::Client,
    base_url: String,
}

impl MetadataClient {
    /// Build a client with the configured per-request timeout. The timeout
    /// bounds how long a single in-flight attempt can outlive the caller's
    /// deadline.
    pub fn new(config: &MetadataConfig) -> ProbeResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ProbeError::RequestBuild(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl MetadataTransport for MetadataClient {
    async fn fetch_ami_id_status(&self) -> ProbeResult<u16> {
        let url = format!("{}{}", self.base_url, AMI_ID_PATH);
        let request = self
            .http
            .get(&url)
            .build()
            .map_err(|e| ProbeError::RequestBuild(e.to_string()))?;

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| ProbeError::Transport(e.to_string()))?;

        Ok(response.status().as_u16())
    }
}

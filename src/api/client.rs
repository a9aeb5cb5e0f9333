use std::time::Duration;

use reqwest::StatusCode;

use crate::config;
use crate::error::MetadataError;

const METADATA_FLAVOR: &str = "Metadata-Flavor";
const METADATA_FLAVOR_VALUE: &str = "Google";
const METADATA_DNS_NAME: &str = "metadata.google.internal";
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin client over the compute metadata server
/// (`http://<host>/computeMetadata/v1/...`).
#[derive(Clone, Debug)]
pub struct MetadataClient {
    client: reqwest::Client,
    host: String,
    host_overridden: bool,
}

impl MetadataClient {
    /// Creates a client for `host`, or for the link-local metadata address
    /// when no host is given.
    pub fn new(client: reqwest::Client, host: Option<String>) -> Self {
        match host {
            Some(host) => Self {
                client,
                host,
                host_overridden: true,
            },
            None => Self {
                client,
                host: config::DEFAULT_METADATA_HOST.to_string(),
                host_overridden: false,
            },
        }
    }

    /// Builds the HTTP client and honours `GCE_METADATA_HOST`.
    pub fn from_env() -> Result<Self, MetadataError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("zone-printer/{}", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MetadataError::Network(e.to_string()))?;
        Ok(Self::new(client, config::get_metadata_host()))
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Reports whether a metadata server is reachable.
    ///
    /// An explicit host (`GCE_METADATA_HOST`) is trusted as is. Otherwise the
    /// link-local address must answer with `Metadata-Flavor: Google`, or
    /// `metadata.google.internal` must resolve.
    pub async fn on_gce(&self) -> bool {
        if self.host_overridden {
            return true;
        }
        let (probed, resolved) = tokio::join!(self.probe_host(), resolve_metadata_dns());
        probed || resolved
    }

    async fn probe_host(&self) -> bool {
        let url = format!("http://{}", self.host);
        match self.client.get(&url).timeout(PROBE_TIMEOUT).send().await {
            Ok(resp) => resp
                .headers()
                .get(METADATA_FLAVOR)
                .is_some_and(|value| value == METADATA_FLAVOR_VALUE),
            Err(e) => {
                tracing::debug!(%e, host = %self.host, "metadata host probe failed");
                false
            }
        }
    }

    /// Fetches the raw value stored under `suffix`.
    pub async fn get(&self, suffix: &str) -> Result<String, MetadataError> {
        let suffix = suffix.trim_start_matches('/');
        let url = format!("http://{}/computeMetadata/v1/{}", self.host, suffix);
        tracing::debug!(%url, "metadata request");

        let resp = self
            .client
            .get(&url)
            .header(METADATA_FLAVOR, METADATA_FLAVOR_VALUE)
            .send()
            .await
            .map_err(|e| MetadataError::Network(e.to_string()))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(MetadataError::NotDefined(suffix.to_string()));
        }
        if !status.is_success() {
            return Err(MetadataError::Status {
                path: suffix.to_string(),
                status: status.as_u16(),
            });
        }

        resp.text()
            .await
            .map_err(|e| MetadataError::Network(e.to_string()))
    }

    pub async fn get_trimmed(&self, suffix: &str) -> Result<String, MetadataError> {
        self.get(suffix).await.map(|value| value.trim().to_string())
    }
}

async fn resolve_metadata_dns() -> bool {
    let lookup = tokio::net::lookup_host((METADATA_DNS_NAME, 80));
    match tokio::time::timeout(PROBE_TIMEOUT, lookup).await {
        Ok(Ok(mut addrs)) => addrs.next().is_some(),
        _ => false,
    }
}

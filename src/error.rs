use thiserror::Error;

/// Errors returned by the metadata server client.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The server answered 404 for the requested key.
    #[error("metadata key {0:?} is not defined")]
    NotDefined(String),

    #[error("metadata request failed: {0}")]
    Network(String),

    #[error("metadata server returned HTTP {status} for {path:?}")]
    Status { path: String, status: u16 },

    #[error("failed to decode metadata value for {path:?}: {reason}")]
    Decode { path: String, reason: String },
}

impl MetadataError {
    pub fn is_not_defined(&self) -> bool {
        matches!(self, MetadataError::NotDefined(_))
    }
}

/// Startup failures that leave the page with nothing meaningful to show.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("failed to get compute zone: {0}")]
    Zone(#[source] MetadataError),

    #[error("failed to get cluster name: {0}")]
    ClusterName(#[source] MetadataError),

    #[error("failed to get cluster uid: {0}")]
    ClusterUid(#[source] MetadataError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid port {0:?}")]
    InvalidPort(String),

    #[error("cannot resolve listen address {addr:?}: {reason}")]
    InvalidAddress { addr: String, reason: String },
}

use http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChainRegistryError {
    #[error("error parsing chain config: {0}")]
    InvalidChainConfig(#[from] serde_json::error::Error),
    #[error("error reading chain config: {0}")]
    FileIO(String),
    #[error("error during chain directory request: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unknown chain: {0}")]
    UnknownChain(String),
}

#[derive(Debug, Error)]
pub enum RestError {
    #[error("error during REST request: {0}")]
    Request(#[from] reqwest::Error),
    #[error("endpoint returned status {0}")]
    Status(StatusCode),
    #[error("{0}")]
    MissingEndpoint(String),
}

impl RestError {
    /// HTTP status carried by the error, if any. Used for fallback branching
    /// on 501 responses from chains without the per-denom supply endpoint.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RestError::Request(e) => e.status(),
            RestError::Status(s) => Some(*s),
            RestError::MissingEndpoint(_) => None,
        }
    }
}

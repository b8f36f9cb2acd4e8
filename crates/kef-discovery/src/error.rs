use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Reddit search error: {0}")]
    Reddit(String),

    #[error("source error: {0}")]
    Source(String),
}

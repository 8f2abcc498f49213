use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Failures at the backend / genre-map source boundary
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid API base URL {url}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GET {url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("failed to read genre map file {path:?}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse genre map file {path:?}: {source}")]
    FileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

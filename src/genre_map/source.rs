//! Where the raw genre map comes from

use super::RawGenreMap;
use crate::api::{ApiError, SinatraClient};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Supplier of the raw genre map - allows swapping the backend for a local file
#[async_trait]
pub trait GenreMapSource: Send + Sync {
    /// Fetch the raw, un-normalized map
    async fn fetch_raw(&self) -> Result<RawGenreMap, ApiError>;
}

#[async_trait]
impl GenreMapSource for SinatraClient {
    async fn fetch_raw(&self) -> Result<RawGenreMap, ApiError> {
        self.fetch_genre_map().await
    }
}

/// Reads the genre map from a local JSON file with the backend's flat shape
#[derive(Debug, Clone)]
pub struct FileGenreMapSource {
    path: PathBuf,
}

impl FileGenreMapSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl GenreMapSource for FileGenreMapSource {
    async fn fetch_raw(&self) -> Result<RawGenreMap, ApiError> {
        log::debug!("Reading genre map from {:?}", self.path);

        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ApiError::FileRead {
                path: self.path.clone(),
                source,
            })?;

        serde_json::from_str(&contents).map_err(|source| ApiError::FileParse {
            path: self.path.clone(),
            source,
        })
    }
}

//! Genre pipeline configuration

use crate::aggregate::{GenreAggregator, DEFAULT_LIMIT};
use crate::api::{SinatraClient, DEFAULT_API_BASE_URL};
use crate::genre_map::{FileGenreMapSource, GenreMapResolver, DEFAULT_LOAD_TIMEOUT};
use crate::registry::MetaGenreRegistry;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for loading and ranking a profile's genres
#[derive(Debug, Clone)]
pub struct ProfileConfig {
    /// Backend base URL (e.g., https://sinatra.up.railway.app)
    pub api_base_url: String,

    /// Read the genre map from this file instead of the backend
    pub genre_map_file: Option<PathBuf>,

    /// Entries in the meta-genre view
    pub meta_limit: usize,

    /// Entries in the sub-genre view
    pub sub_limit: usize,

    /// Per-request timeout, also bounds the genre map load
    pub fetch_timeout: Duration,

    /// Restrict the meta-genre vocabulary (None = full built-in table)
    pub meta_genres: Option<Vec<String>>,
}

impl ProfileConfig {
    /// Create a configuration with default limits and timeout
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            genre_map_file: None,
            meta_limit: DEFAULT_LIMIT,
            sub_limit: DEFAULT_LIMIT,
            fetch_timeout: DEFAULT_LOAD_TIMEOUT,
            meta_genres: None,
        }
    }

    /// Use a local genre map file
    pub fn with_genre_map_file(mut self, path: PathBuf) -> Self {
        self.genre_map_file = Some(path);
        self
    }

    /// Set per-view truncation limits
    pub fn with_limits(mut self, meta_limit: usize, sub_limit: usize) -> Self {
        self.meta_limit = meta_limit;
        self.sub_limit = sub_limit;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Restrict the meta-genre vocabulary
    pub fn with_meta_genres(mut self, names: Vec<String>) -> Self {
        self.meta_genres = Some(names);
        self
    }

    pub fn registry(&self) -> MetaGenreRegistry {
        match &self.meta_genres {
            Some(names) => MetaGenreRegistry::with_vocabulary(names.as_slice()),
            None => MetaGenreRegistry::new(),
        }
    }

    pub fn aggregator(&self) -> GenreAggregator {
        GenreAggregator::new(self.registry()).with_limits(self.meta_limit, self.sub_limit)
    }

    pub fn client(&self) -> Result<SinatraClient> {
        SinatraClient::new(&self.api_base_url, self.fetch_timeout)
            .with_context(|| format!("Failed to create API client for {}", self.api_base_url))
    }

    /// Resolver over the configured genre map source
    pub fn resolver(&self) -> Result<GenreMapResolver> {
        let resolver = match &self.genre_map_file {
            Some(path) => GenreMapResolver::new(FileGenreMapSource::new(path.clone())),
            None => GenreMapResolver::new(self.client()?),
        };
        Ok(resolver.with_timeout(self.fetch_timeout))
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProfileConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.meta_limit, 5);
        assert_eq!(config.sub_limit, 5);
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
        assert_eq!(config.registry().len(), MetaGenreRegistry::new().len());
    }

    #[test]
    fn test_vocabulary_restriction() {
        let config = ProfileConfig::default().with_meta_genres(vec!["rock".into(), "jazz".into()]);
        let registry = config.registry();
        assert!(registry.is_meta_genre("jazz"));
        assert!(!registry.is_meta_genre("pop"));
    }

    #[test]
    fn test_bad_base_url_is_reported() {
        let config = ProfileConfig::new("::nope::");
        assert!(config.client().is_err());
        assert!(config.resolver().is_err());
    }

    #[test]
    fn test_file_source_needs_no_client() {
        let config = ProfileConfig::new("::nope::").with_genre_map_file(PathBuf::from("map.json"));
        assert!(config.resolver().is_ok());
    }
}

//! HTTP client for the profile backend

use super::ApiError;
use crate::genre_map::RawGenreMap;
use crate::model::GenresData;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Production backend
pub const DEFAULT_API_BASE_URL: &str = "https://sinatra.up.railway.app";

/// Only the part of a public profile this crate consumes
#[derive(Debug, Deserialize)]
struct PublicProfile {
    #[serde(default)]
    genres_data: Option<GenresData>,
}

/// Client for the genre endpoints of the backend
#[derive(Debug, Clone)]
pub struct SinatraClient {
    client: Client,
    base_url: Url,
}

impl SinatraClient {
    /// Create a client for `base_url`; `timeout` bounds each request
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let mut url = Url::parse(base_url).map_err(|source| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;

        // Url::join replaces the last segment unless the path ends with '/'
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::ClientBuild)?;

        Ok(Self {
            client,
            base_url: url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /genre-map`: flat sub-genre -> parent map, casing untouched
    pub async fn fetch_genre_map(&self) -> Result<RawGenreMap, ApiError> {
        self.get_json("genre-map").await
    }

    /// `GET /public-profile/{user_id}`: the profile's `genres_data` block.
    ///
    /// A profile without genre data yields an empty payload.
    pub async fn fetch_profile_genres(&self, user_id: &str) -> Result<GenresData, ApiError> {
        let path = format!("public-profile/{}", urlencoding::encode(user_id));
        let profile: PublicProfile = self.get_json(&path).await?;
        Ok(profile.genres_data.unwrap_or_default())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|source| ApiError::InvalidBaseUrl {
                url: format!("{}{}", self.base_url, path),
                source,
            })?;

        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.json::<T>().await.map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

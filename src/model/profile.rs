use super::{FrequencyInput, GenreFrequencies};
use serde::{Deserialize, Serialize};

/// Gradient used for a sub-genre when the backend supplies none
pub const NEUTRAL_GRADIENT: &str = "linear-gradient(to right, #666, #999)";

/// `genres_data` block of a public profile, as sent by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenresData {
    /// Meta-genre level aggregates
    #[serde(default)]
    pub highest: Option<FrequencyInput>,

    /// Fine-grained genre tags
    #[serde(default)]
    pub sub_genres: Option<FrequencyInput>,

    /// Backend's pick for the dominant genre
    #[serde(default)]
    pub top_genre: Option<String>,

    /// Backend's pick for the dominant sub-genre
    #[serde(default)]
    pub top_subgenre: Option<TopSubGenreData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopSubGenreData {
    #[serde(default)]
    pub sub_genre: Option<String>,

    #[serde(default)]
    pub gradient: Option<String>,
}

/// The "current taste" line shown under a profile header
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentTaste {
    pub sub_genre: String,
    pub gradient: String,
}

/// A profile's genre data after normalization.
///
/// Replaced wholesale on every reload; never mutated in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenreProfile {
    pub highest: GenreFrequencies,
    pub sub_genres: GenreFrequencies,
    pub top_genre: Option<String>,
    pub current_taste: Option<CurrentTaste>,
}

impl GenreProfile {
    /// Normalize a raw `genres_data` payload. Missing blocks become empty maps.
    pub fn from_data(data: &GenresData) -> Self {
        let current_taste = data.top_subgenre.as_ref().and_then(|top| {
            let sub_genre = top.sub_genre.as_deref().filter(|s| !s.is_empty())?;
            Some(CurrentTaste {
                sub_genre: sub_genre.to_string(),
                gradient: top
                    .gradient
                    .clone()
                    .filter(|g| !g.is_empty())
                    .unwrap_or_else(|| NEUTRAL_GRADIENT.to_string()),
            })
        });

        Self {
            highest: data
                .highest
                .as_ref()
                .map(GenreFrequencies::from_input)
                .unwrap_or_default(),
            sub_genres: data
                .sub_genres
                .as_ref()
                .map(GenreFrequencies::from_input)
                .unwrap_or_default(),
            top_genre: data.top_genre.clone(),
            current_taste,
        }
    }

    /// True when there is nothing to rank yet
    pub fn is_empty(&self) -> bool {
        self.highest.is_empty() && self.sub_genres.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_from_full_payload() {
        let data: GenresData = serde_json::from_value(json!({
            "highest": {"rock": 40, "pop": 25},
            "sub_genres": [["lo-fi", 5]],
            "top_genre": "rock",
            "top_subgenre": {"sub_genre": "lo-fi", "gradient": "linear-gradient(red, blue)"}
        }))
        .unwrap();

        let profile = GenreProfile::from_data(&data);
        assert_eq!(profile.highest.len(), 2);
        assert_eq!(profile.sub_genres.get("lo-fi"), Some(5.0));
        assert_eq!(profile.top_genre.as_deref(), Some("rock"));

        let taste = profile.current_taste.unwrap();
        assert_eq!(taste.sub_genre, "lo-fi");
        assert_eq!(taste.gradient, "linear-gradient(red, blue)");
    }

    #[test]
    fn test_missing_blocks_are_empty() {
        let data: GenresData = serde_json::from_value(json!({})).unwrap();
        let profile = GenreProfile::from_data(&data);

        assert!(profile.is_empty());
        assert!(profile.current_taste.is_none());
    }

    #[test]
    fn test_malformed_entries_do_not_reject_payload() {
        let data: GenresData = serde_json::from_value(json!({
            "highest": [["rock", 40], ["pop"]],
            "sub_genres": "lo-fi"
        }))
        .unwrap();

        let profile = GenreProfile::from_data(&data);
        assert_eq!(profile.highest.len(), 1);
        assert_eq!(profile.highest.get("rock"), Some(40.0));
        assert!(profile.sub_genres.is_empty());
    }

    #[test]
    fn test_current_taste_defaults_gradient() {
        let data: GenresData = serde_json::from_value(json!({
            "top_subgenre": {"sub_genre": "shoegaze"}
        }))
        .unwrap();

        let taste = GenreProfile::from_data(&data).current_taste.unwrap();
        assert_eq!(taste.gradient, NEUTRAL_GRADIENT);
    }

    #[test]
    fn test_current_taste_needs_a_name() {
        let data: GenresData = serde_json::from_value(json!({
            "top_subgenre": {"gradient": "linear-gradient(red, blue)"}
        }))
        .unwrap();

        assert!(GenreProfile::from_data(&data).current_taste.is_none());
    }
}

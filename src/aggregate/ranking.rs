use crate::genre_map::GenreMap;
use crate::model::{round1, GenreFrequencies, GenreProfile, GenreWeight, RankedGenre};
use crate::registry::MetaGenreRegistry;
use serde::Serialize;

/// Entries shown per view unless configured otherwise
pub const DEFAULT_LIMIT: usize = 5;

/// Stable descending sort: ties keep arrival order
fn rank<'a>(entries: impl Iterator<Item = &'a GenreWeight>) -> Vec<&'a GenreWeight> {
    let mut ranked: Vec<&GenreWeight> = entries.collect();
    ranked.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    ranked
}

/// Top meta-genres, rounded to one decimal and then ranked on the rounded value
pub fn top_meta_genres(highest: &GenreFrequencies, limit: usize) -> Vec<RankedGenre> {
    let mut ranked: Vec<RankedGenre> = highest
        .entries()
        .iter()
        .map(|entry| RankedGenre::new(entry.name.clone(), round1(entry.weight)))
        .collect();
    ranked.sort_by(|a, b| b.value.total_cmp(&a.value));
    ranked.truncate(limit);
    ranked
}

/// Whether a sub-genre may appear in the sub-genre view.
///
/// Returns its parent when the sub-genre resolves through the map, the
/// parent differs from the sub-genre itself, and the sub-genre is not a
/// meta-genre in its own right (it would then show up in both views).
pub fn is_displayable_sub_genre<'m>(
    name: &str,
    genre_map: &'m GenreMap,
    registry: &MetaGenreRegistry,
) -> Option<&'m str> {
    let lower = name.to_lowercase();
    let parent = genre_map.parent_of(&lower);

    match parent {
        Some(parent) if parent != lower && !registry.is_meta_genre(lower.as_str()) => Some(parent),
        _ => {
            log::debug!("Excluded sub-genre: {} (parent: {:?})", name, parent);
            None
        }
    }
}

/// Top sub-genres that pass [`is_displayable_sub_genre`], filtered before truncation.
///
/// An empty (not yet loaded) genre map yields an empty list.
pub fn top_sub_genres(
    sub_genres: &GenreFrequencies,
    genre_map: &GenreMap,
    registry: &MetaGenreRegistry,
    limit: usize,
) -> Vec<RankedGenre> {
    if genre_map.is_empty() {
        return Vec::new();
    }

    let eligible = sub_genres
        .entries()
        .iter()
        .filter(|entry| is_displayable_sub_genre(&entry.name, genre_map, registry).is_some());

    rank(eligible)
        .into_iter()
        .take(limit)
        .map(|entry| RankedGenre::new(entry.name.clone(), entry.weight))
        .collect()
}

/// Names-only summary shown during onboarding
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenreSnapshot {
    pub meta_genres: Vec<String>,
    pub sub_genres: Vec<String>,
}

/// Top genre names of each map, unfiltered
pub fn genre_snapshot(profile: &GenreProfile, meta_limit: usize, sub_limit: usize) -> GenreSnapshot {
    let names = |frequencies: &GenreFrequencies, limit: usize| -> Vec<String> {
        rank(frequencies.entries().iter())
            .into_iter()
            .take(limit)
            .map(|entry| entry.name.clone())
            .collect()
    };

    GenreSnapshot {
        meta_genres: names(&profile.highest, meta_limit),
        sub_genres: names(&profile.sub_genres, sub_limit),
    }
}

/// Aggregation settings bundled with the registry they classify against
#[derive(Debug, Clone)]
pub struct GenreAggregator {
    registry: MetaGenreRegistry,
    meta_limit: usize,
    sub_limit: usize,
}

impl GenreAggregator {
    pub fn new(registry: MetaGenreRegistry) -> Self {
        Self {
            registry,
            meta_limit: DEFAULT_LIMIT,
            sub_limit: DEFAULT_LIMIT,
        }
    }

    /// Set the per-view truncation limits
    pub fn with_limits(mut self, meta_limit: usize, sub_limit: usize) -> Self {
        self.meta_limit = meta_limit;
        self.sub_limit = sub_limit;
        self
    }

    pub fn registry(&self) -> &MetaGenreRegistry {
        &self.registry
    }

    pub fn meta_view(&self, profile: &GenreProfile) -> Vec<RankedGenre> {
        top_meta_genres(&profile.highest, self.meta_limit)
    }

    pub fn sub_view(&self, profile: &GenreProfile, genre_map: &GenreMap) -> Vec<RankedGenre> {
        top_sub_genres(&profile.sub_genres, genre_map, &self.registry, self.sub_limit)
    }
}

impl Default for GenreAggregator {
    fn default() -> Self {
        Self::new(MetaGenreRegistry::new())
    }
}

//! Meta-genre registry
//!
//! Fixed visual identity (color, gradient, emoji) for the top-level genres,
//! plus classification of arbitrary genre strings. The table is compiled in;
//! lookups are case-insensitive and always fall back to the `other` entry.

use serde::Serialize;
use std::collections::HashMap;

/// Name of the fallback entry, always present
pub const OTHER: &str = "other";

/// (name, color, gradient, emoji)
const DEFAULT_META_GENRES: &[(&str, &str, &str, &str)] = &[
    ("rock", "#ff6f61", "linear-gradient(to right, #ff6f61, #ffb199)", "🎸"),
    ("pop", "#90D5FF", "linear-gradient(to right, #90d5ff, #d6b4fc)", "🎤"),
    ("r&b", "#88b04b", "linear-gradient(to right, #88b04b, #c5e384)", "🎷"),
    ("electronic", "#009688", "linear-gradient(to right, #009688, #4dd0e1)", "🎛️"),
    ("hip-hop", "#f7cac9", "linear-gradient(to right, #f7cac9, #f4a7b9)", "🎧"),
    ("metal", "#505050", "linear-gradient(to right, #505050, #8c8c8c)", "🤘"),
    ("folk", "#8d5524", "linear-gradient(to right, #8d5524, #c68642)", "🪕"),
    ("jazz", "#6b5b95", "linear-gradient(to right, #6b5b95, #a393d1)", "🎺"),
    ("reggae", "#33cc99", "linear-gradient(to right, #33cc99, #f7e05b)", "🌴"),
    (OTHER, "#000080", "linear-gradient(to right, #000080, #4a4ae8)", "🎵"),
];

/// Substrings recognised by [`MetaGenreRegistry::classify`], checked in order
const CLASSIFIER_KEYWORDS: &[&str] = &[
    "rock",
    "pop",
    "r&b",
    "electronic",
    "hip hop",
    "hip-hop",
    "metal",
    "folk",
    "jazz",
    "reggae",
    "blues",
    "country",
    "new age",
    "classical",
    "easy listening",
    "latin",
    "religious",
    "vocal",
    "indie",
];

/// Visual identity of one meta-genre
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaGenre {
    pub name: String,
    pub color: String,
    pub gradient: String,
    pub emoji: String,
}

impl MetaGenre {
    fn from_row(&(name, color, gradient, emoji): &(&str, &str, &str, &str)) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            gradient: gradient.to_string(),
            emoji: emoji.to_string(),
        }
    }
}

/// Case-insensitive registry of meta-genres.
///
/// Construct once at startup and share by reference.
#[derive(Debug, Clone)]
pub struct MetaGenreRegistry {
    /// Lowercase name -> entry. Always contains [`OTHER`].
    entries: HashMap<String, MetaGenre>,
}

impl MetaGenreRegistry {
    /// Registry with the full compiled-in vocabulary
    pub fn new() -> Self {
        Self::from_entries(DEFAULT_META_GENRES.iter().map(MetaGenre::from_row))
    }

    /// Registry with custom entries. The `other` entry is added if missing.
    pub fn from_entries(entries: impl IntoIterator<Item = MetaGenre>) -> Self {
        let mut map: HashMap<String, MetaGenre> = entries
            .into_iter()
            .map(|entry| (entry.name.to_lowercase(), entry))
            .collect();

        if !map.contains_key(OTHER) {
            let other = DEFAULT_META_GENRES
                .iter()
                .find(|row| row.0 == OTHER)
                .map(MetaGenre::from_row);
            if let Some(other) = other {
                map.insert(OTHER.to_string(), other);
            }
        }

        Self { entries: map }
    }

    /// Restrict the compiled-in vocabulary to the given names.
    ///
    /// Unknown names are ignored with a warning.
    pub fn with_vocabulary<S: AsRef<str>>(names: &[S]) -> Self {
        let defaults = Self::new();
        let selected: Vec<MetaGenre> = names
            .iter()
            .filter_map(|name| {
                let key = name.as_ref().trim().to_lowercase();
                let entry = defaults.entries.get(&key).cloned();
                if entry.is_none() {
                    log::warn!("Unknown meta-genre in vocabulary: {}", name.as_ref());
                }
                entry
            })
            .collect();

        Self::from_entries(selected)
    }

    /// Entry for `name`, or the `other` entry. Never fails.
    pub fn get<'a>(&self, name: impl Into<Option<&'a str>>) -> &MetaGenre {
        name.into()
            .and_then(|n| self.entries.get(&n.to_lowercase()))
            .unwrap_or_else(|| self.other())
    }

    pub fn color_of<'a>(&self, name: impl Into<Option<&'a str>>) -> &str {
        &self.get(name).color
    }

    pub fn gradient_of<'a>(&self, name: impl Into<Option<&'a str>>) -> &str {
        &self.get(name).gradient
    }

    pub fn emoji_of<'a>(&self, name: impl Into<Option<&'a str>>) -> &str {
        &self.get(name).emoji
    }

    /// True iff the lowercased name is a registry key (`other` included)
    pub fn is_meta_genre<'a>(&self, name: impl Into<Option<&'a str>>) -> bool {
        name.into()
            .is_some_and(|n| self.entries.contains_key(&n.to_lowercase()))
    }

    /// Map a free-form genre tag to a broad genre by keyword, e.g.
    /// `"indie rock"` -> `"rock"`. Used when no genre map entry exists.
    pub fn classify(genre: &str) -> &'static str {
        let lower = genre.to_lowercase();
        match CLASSIFIER_KEYWORDS.iter().find(|kw| lower.contains(*kw)) {
            Some(&"hip hop") => "hip-hop",
            Some(kw) => *kw,
            None => OTHER,
        }
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn other(&self) -> &MetaGenre {
        // from_entries always inserts OTHER
        &self.entries[OTHER]
    }
}

impl Default for MetaGenreRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = MetaGenreRegistry::new();
        assert_eq!(registry.color_of("ROCK"), "#ff6f61");
        assert_eq!(registry.color_of("Rock"), registry.color_of("rock"));
        assert_eq!(registry.emoji_of("Jazz"), "🎺");
    }

    #[test]
    fn test_fallback_never_empty() {
        let registry = MetaGenreRegistry::new();
        let other = registry.get(OTHER).clone();

        for name in [None, Some(""), Some("vaporwave"), Some("  ")] {
            assert_eq!(registry.color_of(name), other.color);
            assert_eq!(registry.gradient_of(name), other.gradient);
            assert!(!registry.color_of(name).is_empty());
            assert!(!registry.gradient_of(name).is_empty());
        }
    }

    #[test]
    fn test_is_meta_genre() {
        let registry = MetaGenreRegistry::new();
        assert!(registry.is_meta_genre("Electronic"));
        assert!(registry.is_meta_genre("hip-hop"));
        assert!(registry.is_meta_genre(OTHER));
        assert!(!registry.is_meta_genre("lo-fi"));
        assert!(!registry.is_meta_genre(""));
        assert!(!registry.is_meta_genre(None));
    }

    #[test]
    fn test_vocabulary_restriction_keeps_other() {
        let registry = MetaGenreRegistry::with_vocabulary(&["Rock", "pop", "polka"]);
        assert_eq!(registry.names(), vec!["other", "pop", "rock"]);
        assert!(!registry.is_meta_genre("jazz"));
        assert_eq!(registry.color_of("jazz"), registry.color_of(OTHER));
    }

    #[test]
    fn test_custom_entries_get_other() {
        let registry = MetaGenreRegistry::from_entries(vec![MetaGenre {
            name: "Polka".to_string(),
            color: "#123456".to_string(),
            gradient: "linear-gradient(#123456, #654321)".to_string(),
            emoji: "🪗".to_string(),
        }]);

        assert!(registry.is_meta_genre("polka"));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.color_of("unknown"), "#000080");
    }

    #[test]
    fn test_classify_by_keyword() {
        assert_eq!(MetaGenreRegistry::classify("Indie Rock"), "rock");
        assert_eq!(MetaGenreRegistry::classify("UK Hip Hop"), "hip-hop");
        assert_eq!(MetaGenreRegistry::classify("delta blues"), "blues");
        assert_eq!(MetaGenreRegistry::classify("vaporwave"), OTHER);
    }
}

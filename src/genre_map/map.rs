use serde_json::Value;
use std::collections::HashMap;

/// Flat `{sub_genre: parent}` object as sent by the backend, arbitrary casing
pub type RawGenreMap = serde_json::Map<String, Value>;

/// Normalized sub-genre -> meta-genre table. Keys and values are lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreMap {
    parents: HashMap<String, String>,
}

impl GenreMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowercase both sides of a raw map. Non-string parents are skipped.
    pub fn from_raw(raw: &RawGenreMap) -> Self {
        let mut parents = HashMap::with_capacity(raw.len());

        for (sub_genre, parent) in raw {
            match parent.as_str() {
                Some(parent) => {
                    parents.insert(sub_genre.to_lowercase(), parent.to_lowercase());
                }
                None => log::debug!("Skipping genre map entry {} with non-string parent", sub_genre),
            }
        }

        Self { parents }
    }

    /// Parent meta-genre of a sub-genre, case-insensitive
    pub fn parent_of(&self, sub_genre: &str) -> Option<&str> {
        self.parents.get(&sub_genre.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// (sub-genre, parent) pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parents.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for GenreMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            parents: iter
                .into_iter()
                .map(|(k, v)| (k.as_ref().to_lowercase(), v.as_ref().to_lowercase()))
                .collect(),
        }
    }
}

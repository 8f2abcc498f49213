use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Genre frequencies exactly as received from the backend.
///
/// The backend has sent both a plain JSON object (`{"rock": 40}`) and an
/// array of `[name, weight]` pairs over time, so both are accepted here and
/// normalized by [`GenreFrequencies::from_input`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FrequencyInput {
    /// `[["rock", 40], ["pop", 25]]`. Elements are checked one by one so a
    /// single malformed pair does not reject the whole block.
    Pairs(Vec<Value>),

    /// `{"rock": 40, "pop": 25}`
    Map(serde_json::Map<String, Value>),

    /// Any other shape; normalizes to an empty map
    Unrecognized(Value),
}

/// A single genre and its play-count derived weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreWeight {
    /// Genre name, case preserved as received
    pub name: String,

    /// Finite, non-negative weight
    pub weight: f64,
}

/// Canonical genre frequency map.
///
/// Keeps arrival order so that ranking ties stay stable, and guarantees that
/// every stored weight is finite and non-negative.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenreFrequencies {
    entries: Vec<GenreWeight>,

    /// Name -> position in `entries`
    index: HashMap<String, usize>,
}

impl GenreFrequencies {
    /// Create an empty frequency map
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize either input shape into the canonical representation.
    ///
    /// Entries whose weight is not a finite, non-negative number are dropped.
    pub fn from_input(input: &FrequencyInput) -> Self {
        let mut frequencies = Self::new();

        match input {
            FrequencyInput::Pairs(pairs) => {
                for pair in pairs {
                    match pair.as_array().map(Vec::as_slice) {
                        Some([Value::String(name), value]) => frequencies.insert_value(name, value),
                        _ => log::debug!("Dropping malformed genre pair: {}", pair),
                    }
                }
            }
            FrequencyInput::Map(map) => {
                for (name, value) in map {
                    frequencies.insert_value(name, value);
                }
            }
            FrequencyInput::Unrecognized(value) => {
                log::debug!("Ignoring genre frequencies of unexpected shape: {}", value);
            }
        }

        frequencies
    }

    /// Insert a weight, replacing any previous weight for the same name in place.
    ///
    /// Returns false (and stores nothing) for non-finite or negative weights.
    pub fn insert(&mut self, name: impl Into<String>, weight: f64) -> bool {
        if !weight.is_finite() || weight < 0.0 {
            return false;
        }

        let name = name.into();
        match self.index.get(&name) {
            Some(&pos) => self.entries[pos].weight = weight,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push(GenreWeight { name, weight });
            }
        }
        true
    }

    fn insert_value(&mut self, name: &str, value: &Value) {
        let stored = coerce_weight(value).is_some_and(|weight| self.insert(name, weight));
        if !stored {
            log::debug!("Dropping malformed genre weight: {} = {}", name, value);
        }
    }

    /// Weight of a genre, matched case-sensitively
    pub fn get(&self, name: &str) -> Option<f64> {
        self.index.get(name).map(|&pos| self.entries[pos].weight)
    }

    /// All entries in arrival order
    pub fn entries(&self) -> &[GenreWeight] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for GenreFrequencies {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut frequencies = Self::new();
        for (name, weight) in iter {
            frequencies.insert(name, weight);
        }
        frequencies
    }
}

impl From<&FrequencyInput> for GenreFrequencies {
    fn from(input: &FrequencyInput) -> Self {
        Self::from_input(input)
    }
}

/// Numbers are taken as-is, numeric strings are parsed, anything else is rejected
fn coerce_weight(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

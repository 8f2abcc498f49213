//! Genre data model
//!
//! This module defines the genre payload shapes received from the backend
//! and the canonical forms the aggregation pipeline works on.

mod frequency;
mod profile;
mod ranked;

pub use frequency::{FrequencyInput, GenreFrequencies, GenreWeight};
pub use profile::{CurrentTaste, GenreProfile, GenresData, TopSubGenreData, NEUTRAL_GRADIENT};
pub use ranked::RankedGenre;

pub(crate) use ranked::round1;

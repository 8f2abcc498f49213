//! Sub-genre -> meta-genre lookup
//!
//! The map is fetched once per session through a [`GenreMapSource`] and
//! published by the [`GenreMapResolver`] for synchronous lookups.

mod map;
mod resolver;
mod source;

pub use map::{GenreMap, RawGenreMap};
pub use resolver::{GenreMapResolver, LoadState, DEFAULT_LOAD_TIMEOUT};
pub use source::{FileGenreMapSource, GenreMapSource};

//! Sinatra Genres - genre aggregation for public music profiles
//!
//! This library turns a profile's raw genre frequencies into ranked
//! meta-genre and sub-genre views and lays them out as proportional bars.

pub mod aggregate;
pub mod api;
pub mod config;
pub mod genre_map;
pub mod model;
pub mod pipeline;
pub mod registry;
pub mod render;

pub use config::ProfileConfig;
pub use genre_map::GenreMapResolver;
pub use pipeline::{GenreCharts, GenrePipeline};
pub use registry::MetaGenreRegistry;

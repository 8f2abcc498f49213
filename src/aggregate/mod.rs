//! Genre aggregation
//!
//! Pure ranking of a profile's frequency maps into the two display lists
//! (meta-genres, sub-genres), plus a memoizing wrapper keyed on its inputs.

mod ranking;
mod views;

pub use ranking::{
    genre_snapshot, is_displayable_sub_genre, top_meta_genres, top_sub_genres, GenreAggregator,
    GenreSnapshot, DEFAULT_LIMIT,
};
pub use views::GenreViews;

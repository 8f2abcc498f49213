//! Proportional bar rendering
//!
//! [`BarChart::layout`] turns a ranked list into bar geometry, colors and
//! entrance timings; [`TextRenderer`] paints a chart for the terminal.
//! [`GenreCarousel`] tracks which of the two genre views is shown.

mod bars;
mod carousel;
mod text;

pub use bars::{
    Bar, BarChart, BarPalette, BAR_GROW, CONTAINER_FADE, ENTRANCE_STAGGER, NO_DATA_PLACEHOLDER,
};
pub use carousel::{GenreCarousel, GenreView, LOADING_PLACEHOLDER};
pub use text::TextRenderer;

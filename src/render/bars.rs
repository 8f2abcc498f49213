use crate::genre_map::GenreMap;
use crate::model::{round1, RankedGenre};
use crate::registry::{MetaGenreRegistry, OTHER};
use serde::Serialize;
use std::time::Duration;

/// Shown instead of an empty chart
pub const NO_DATA_PLACEHOLDER: &str = "No genre data available.";

/// Delay between consecutive bars' entrance
pub const ENTRANCE_STAGGER: Duration = Duration::from_millis(80);

/// Time for a bar to grow from zero to its width
pub const BAR_GROW: Duration = Duration::from_millis(600);

/// Fade-in of the chart container
pub const CONTAINER_FADE: Duration = Duration::from_millis(400);

/// How a bar's fill is chosen from its genre name
pub enum BarPalette<'a> {
    /// Registry gradient of the genre itself (meta-genre view)
    MetaGradient(&'a MetaGenreRegistry),

    /// Registry color of the genre's parent (sub-genre view)
    ParentColor {
        registry: &'a MetaGenreRegistry,
        genre_map: &'a GenreMap,
    },

    /// Caller-supplied resolver
    Custom(&'a dyn Fn(&str) -> String),
}

impl BarPalette<'_> {
    pub fn fill_for(&self, name: &str) -> String {
        match self {
            BarPalette::MetaGradient(registry) => registry.gradient_of(name).to_string(),
            BarPalette::ParentColor {
                registry,
                genre_map,
            } => {
                let parent = genre_map.parent_of(name).unwrap_or(OTHER);
                registry.color_of(parent).to_string()
            }
            BarPalette::Custom(resolve) => resolve(name),
        }
    }
}

/// One laid-out bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub name: String,
    pub value: f64,

    /// Label percentage, one decimal
    pub percent: f64,

    /// Unrounded fill width in percent of the track
    pub width: f64,

    /// CSS color or gradient
    pub fill: String,

    /// Entrance delay, staggered by input position
    #[serde(with = "millis")]
    pub delay: Duration,

    #[serde(with = "millis")]
    pub duration: Duration,
}

/// A laid-out chart, or the placeholder when there is nothing to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum BarChart {
    Placeholder(String),
    Bars(Vec<Bar>),
}

impl BarChart {
    /// Lay out `entries` in input order.
    ///
    /// The denominator is the sum of all valid values in `entries`, floored
    /// at 1. Entries with a non-finite or negative value are skipped; the
    /// stagger of later bars still follows their input position.
    pub fn layout(entries: &[RankedGenre], palette: &BarPalette<'_>) -> Self {
        let valid = |value: f64| value.is_finite() && value >= 0.0;

        let total: f64 = entries
            .iter()
            .map(|e| e.value)
            .filter(|&v| valid(v))
            .sum::<f64>()
            .max(1.0);

        let bars: Vec<Bar> = entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                if !valid(entry.value) {
                    log::debug!("Skipping bar for {} with value {}", entry.name, entry.value);
                    return None;
                }

                let width = entry.value / total * 100.0;
                Some(Bar {
                    name: entry.name.clone(),
                    value: entry.value,
                    percent: round1(width),
                    width,
                    fill: palette.fill_for(&entry.name),
                    delay: ENTRANCE_STAGGER * index as u32,
                    duration: BAR_GROW,
                })
            })
            .collect();

        if bars.is_empty() {
            BarChart::Placeholder(NO_DATA_PLACEHOLDER.to_string())
        } else {
            BarChart::Bars(bars)
        }
    }

    pub fn bars(&self) -> &[Bar] {
        match self {
            BarChart::Bars(bars) => bars,
            BarChart::Placeholder(_) => &[],
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, BarChart::Placeholder(_))
    }

    /// Sum of the label percentages
    pub fn total_percent(&self) -> f64 {
        self.bars().iter().map(|bar| bar.percent).sum()
    }
}

mod millis {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis() as u64)
    }
}

use super::{BarChart, GenreView, LOADING_PLACEHOLDER};
use std::fmt::Write;

const FILLED: char = '█';
const EMPTY: char = '░';

/// Paints bar charts as plain text for the terminal
#[derive(Debug, Clone)]
pub struct TextRenderer {
    /// Characters in a 100% bar
    bar_width: usize,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self { bar_width: 30 }
    }

    pub fn with_bar_width(mut self, bar_width: usize) -> Self {
        self.bar_width = bar_width.max(1);
        self
    }

    /// One line per bar: name, bar, percentage label
    pub fn render(&self, chart: &BarChart) -> String {
        let bars = match chart {
            BarChart::Placeholder(text) => return format!("{}\n", text),
            BarChart::Bars(bars) => bars,
        };

        let name_width = bars.iter().map(|b| b.name.chars().count()).max().unwrap_or(0);
        let mut out = String::new();

        for bar in bars {
            let filled = ((bar.width / 100.0) * self.bar_width as f64).round() as usize;
            let filled = filled.min(self.bar_width);
            let track: String = std::iter::repeat(FILLED)
                .take(filled)
                .chain(std::iter::repeat(EMPTY).take(self.bar_width - filled))
                .collect();

            let padding = name_width - bar.name.chars().count();
            let _ = writeln!(
                out,
                "{}{}  {}  {:>5.1}%",
                bar.name,
                " ".repeat(padding),
                track,
                bar.percent
            );
        }

        out
    }

    /// Heading plus chart, or the loading placeholder when the view is still empty
    pub fn render_view(&self, view: GenreView, chart: Option<&BarChart>) -> String {
        let body = match chart {
            Some(chart) => self.render(chart),
            None => format!("{}\n", LOADING_PLACEHOLDER),
        };
        format!("{}\n{}", view.heading(), body)
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RankedGenre;
    use crate::registry::MetaGenreRegistry;
    use crate::render::{BarPalette, NO_DATA_PLACEHOLDER};

    #[test]
    fn test_render_lines() {
        let registry = MetaGenreRegistry::new();
        let chart = BarChart::layout(
            &[RankedGenre::new("rock", 3.0), RankedGenre::new("pop", 1.0)],
            &BarPalette::MetaGradient(&registry),
        );

        let text = TextRenderer::new().with_bar_width(4).render(&chart);
        assert_eq!(text, "rock  ███░   75.0%\npop   █░░░   25.0%\n");
    }

    #[test]
    fn test_render_placeholder() {
        let registry = MetaGenreRegistry::new();
        let chart = BarChart::layout(&[], &BarPalette::MetaGradient(&registry));
        assert_eq!(TextRenderer::new().render(&chart), format!("{}\n", NO_DATA_PLACEHOLDER));
    }

    #[test]
    fn test_render_view_loading() {
        let text = TextRenderer::new().render_view(GenreView::Sub, None);
        assert_eq!(text, "🧩 Top Sub-genres\nLoading genre data...\n");
    }
}

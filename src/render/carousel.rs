/// Shown while the current view has no entries yet
pub const LOADING_PLACEHOLDER: &str = "Loading genre data...";

/// The two genre views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenreView {
    #[default]
    Meta,
    Sub,
}

impl GenreView {
    pub const ALL: [GenreView; 2] = [GenreView::Meta, GenreView::Sub];

    pub fn index(self) -> usize {
        match self {
            GenreView::Meta => 0,
            GenreView::Sub => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn heading(self) -> &'static str {
        match self {
            GenreView::Meta => "🎸 Top Genres",
            GenreView::Sub => "🧩 Top Sub-genres",
        }
    }
}

/// Toggle between the meta and sub-genre views.
///
/// Changes only on explicit input; starts on [`GenreView::Meta`].
#[derive(Debug, Clone, Default)]
pub struct GenreCarousel {
    current: GenreView,
}

impl GenreCarousel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> GenreView {
        self.current
    }

    /// Swipe left. Stays on the last view.
    pub fn next(&mut self) -> GenreView {
        let index = (self.current.index() + 1).min(GenreView::ALL.len() - 1);
        self.current = GenreView::ALL[index];
        self.current
    }

    /// Swipe right. Stays on the first view.
    pub fn previous(&mut self) -> GenreView {
        let index = self.current.index().saturating_sub(1);
        self.current = GenreView::ALL[index];
        self.current
    }

    /// Jump to a view by its indicator dot; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) -> GenreView {
        if let Some(view) = GenreView::from_index(index) {
            self.current = view;
        }
        self.current
    }
}

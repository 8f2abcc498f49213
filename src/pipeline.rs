//! Profile genre pipeline orchestration
//!
//! backend -> genre map resolver (once) + profile payload (per load)
//! -> memoized aggregation -> bar layout.

use crate::aggregate::{GenreAggregator, GenreViews};
use crate::api::SinatraClient;
use crate::genre_map::{GenreMapResolver, LoadState};
use crate::model::{CurrentTaste, GenreProfile};
use crate::render::{BarChart, BarPalette, GenreView};
use anyhow::{Context, Result};
use std::sync::Arc;

/// Everything needed to paint a profile's genre section
#[derive(Debug, Clone, PartialEq)]
pub struct GenreCharts {
    pub current_taste: Option<CurrentTaste>,
    pub meta: BarChart,

    /// None while the genre map is still loading
    pub sub: Option<BarChart>,
}

impl GenreCharts {
    /// Chart for a view, None meaning "still loading"
    pub fn for_view(&self, view: GenreView) -> Option<&BarChart> {
        match view {
            GenreView::Meta => Some(&self.meta),
            GenreView::Sub => self.sub.as_ref(),
        }
    }
}

/// Main genre pipeline
pub struct GenrePipeline {
    resolver: Arc<GenreMapResolver>,
    views: GenreViews,
}

impl GenrePipeline {
    /// Create a pipeline sharing a session-wide resolver
    pub fn new(resolver: Arc<GenreMapResolver>, aggregator: GenreAggregator) -> Self {
        Self {
            resolver,
            views: GenreViews::new(aggregator),
        }
    }

    pub fn resolver(&self) -> &Arc<GenreMapResolver> {
        &self.resolver
    }

    /// Fetch and normalize a profile's genre payload
    pub async fn load_profile(client: &SinatraClient, user_id: &str) -> Result<Arc<GenreProfile>> {
        log::info!("Loading genres for profile {}", user_id);

        let data = client
            .fetch_profile_genres(user_id)
            .await
            .with_context(|| format!("Failed to load public profile {}", user_id))?;

        let profile = GenreProfile::from_data(&data);
        log::info!(
            "Profile loaded: {} meta-genres, {} sub-genres",
            profile.highest.len(),
            profile.sub_genres.len()
        );

        Ok(Arc::new(profile))
    }

    /// Load the genre map if needed, then lay out both views
    pub async fn charts(&mut self, profile: &Arc<GenreProfile>) -> GenreCharts {
        self.resolver.load().await;
        self.charts_now(profile)
    }

    /// Lay out both views with whatever genre map is published right now
    pub fn charts_now(&mut self, profile: &Arc<GenreProfile>) -> GenreCharts {
        let genre_map = self.resolver.get();
        let map_settled = matches!(self.resolver.state(), LoadState::Ready | LoadState::Failed);

        self.views.refresh(profile, &genre_map);
        let (meta, sub) = self.views.cached();
        let registry = self.views.aggregator().registry();

        let meta_chart = BarChart::layout(meta, &BarPalette::MetaGradient(registry));
        let sub_chart = if map_settled {
            Some(BarChart::layout(
                sub,
                &BarPalette::ParentColor {
                    registry,
                    genre_map: &genre_map,
                },
            ))
        } else {
            None
        };

        GenreCharts {
            current_taste: profile.current_taste.clone(),
            meta: meta_chart,
            sub: sub_chart,
        }
    }

    /// Number of aggregation passes performed so far
    pub fn computations(&self) -> usize {
        self.views.computations()
    }
}

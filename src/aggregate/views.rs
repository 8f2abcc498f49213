use super::GenreAggregator;
use crate::genre_map::GenreMap;
use crate::model::{GenreProfile, RankedGenre};
use std::sync::Arc;

#[derive(Debug)]
struct Computed {
    profile: Arc<GenreProfile>,
    genre_map: Arc<GenreMap>,
    meta: Vec<RankedGenre>,
    sub: Vec<RankedGenre>,
}

/// Memoized meta / sub-genre lists.
///
/// Inputs are compared by `Arc` identity: a reloaded profile or a newly
/// published genre map triggers recomputation, repeated reads do not.
#[derive(Debug)]
pub struct GenreViews {
    aggregator: GenreAggregator,
    computed: Option<Computed>,
    computations: usize,
}

impl GenreViews {
    pub fn new(aggregator: GenreAggregator) -> Self {
        Self {
            aggregator,
            computed: None,
            computations: 0,
        }
    }

    /// Ranked (meta, sub) lists for these inputs, recomputed only when an input changed
    pub fn get(
        &mut self,
        profile: &Arc<GenreProfile>,
        genre_map: &Arc<GenreMap>,
    ) -> (&[RankedGenre], &[RankedGenre]) {
        self.refresh(profile, genre_map);
        self.cached()
    }

    /// Recompute if either input differs from the cached pair. Returns true if it did.
    pub fn refresh(&mut self, profile: &Arc<GenreProfile>, genre_map: &Arc<GenreMap>) -> bool {
        let fresh = self.computed.as_ref().is_some_and(|c| {
            Arc::ptr_eq(&c.profile, profile) && Arc::ptr_eq(&c.genre_map, genre_map)
        });
        if fresh {
            return false;
        }

        self.computations += 1;
        self.computed = Some(Computed {
            profile: Arc::clone(profile),
            genre_map: Arc::clone(genre_map),
            meta: self.aggregator.meta_view(profile),
            sub: self.aggregator.sub_view(profile, genre_map),
        });
        true
    }

    /// Lists from the last computation; empty before the first
    pub fn cached(&self) -> (&[RankedGenre], &[RankedGenre]) {
        match &self.computed {
            Some(c) => (&c.meta, &c.sub),
            None => (&[], &[]),
        }
    }

    /// How many times the lists were actually computed
    pub fn computations(&self) -> usize {
        self.computations
    }

    pub fn aggregator(&self) -> &GenreAggregator {
        &self.aggregator
    }
}

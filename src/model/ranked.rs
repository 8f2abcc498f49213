use serde::{Deserialize, Serialize};

/// A genre ranked for display, ordered by descending value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedGenre {
    /// Genre name as received
    pub name: String,

    /// Display value (finite, non-negative)
    pub value: f64,
}

impl RankedGenre {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Round to one decimal place. Values too large to scale are returned as-is.
pub(crate) fn round1(value: f64) -> f64 {
    let scaled = value * 10.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 10.0
}

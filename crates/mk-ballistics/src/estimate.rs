//! Quick hit-chance estimates for the aiming readout.
//!
//! Shots are assumed to land uniformly across the full dispersion span, so
//! the estimate only matches the real roll at its ends.

use crate::accuracy::{AccuracyLadder, HitQuality};
use crate::aim::arcmin_to_radians;
use crate::dispersion::DispersionSources;

/// Estimated chance of landing in each tier.
#[derive(Debug, Clone, PartialEq)]
pub struct ChanceEstimate {
    /// Chance per tier, strictest first. Chances are exclusive.
    pub chances: Vec<(HitQuality, f64)>,
    /// Chance of not connecting at all.
    pub miss: f64,
}

impl ChanceEstimate {
    /// The estimated chance of landing exactly in `tier`.
    pub fn chance(&self, tier: HitQuality) -> f64 {
        self.chances
            .iter()
            .find(|(t, _)| *t == tier)
            .map_or(0.0, |(_, c)| *c)
    }

    /// The estimated chance of landing in `tier` or anything better.
    pub fn at_least(&self, tier: HitQuality) -> f64 {
        self.chances
            .iter()
            .filter(|(t, _)| *t <= tier)
            .map(|(_, c)| c)
            .sum()
    }
}

/// Estimate tier chances for a shot at `range` on a target `target_size` across.
///
/// # Panics
///
/// Panics if `range` or `target_size` is not positive.
pub fn estimate_chances(
    sources: &DispersionSources,
    range: f64,
    target_size: f64,
    ladder: &AccuracyLadder,
) -> ChanceEstimate {
    assert!(range > 0.0, "estimate range must be positive, got {range}");
    assert!(target_size > 0.0, "estimate target size must be positive, got {target_size}");

    let max_offset = range * arcmin_to_radians(sources.max());
    let mut reached = 0.0;
    let chances = ladder
        .tiers()
        .map(|(tier, threshold)| {
            let cumulative = if max_offset <= 0.0 {
                1.0
            } else {
                (threshold * target_size / max_offset).min(1.0)
            };
            let chance = (cumulative - reached).max(0.0);
            reached = cumulative.max(reached);
            (tier, chance)
        })
        .collect();

    ChanceEstimate {
        chances,
        miss: (1.0 - reached).max(0.0),
    }
}

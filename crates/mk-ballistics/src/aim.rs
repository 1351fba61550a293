//! The aim roll: how far a single shot strays from its aim point.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::dispersion::DispersionSources;

/// Outcome of one aim roll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimResult {
    /// Miss distance relative to the target's size: 0 is dead center, 1
    /// grazes the silhouette edge, above 1 misses cleanly.
    pub missed_by: f64,
    /// Miss distance in tiles at the target's range.
    pub missed_by_tiles: f64,
    /// The aggregated dispersion the shot was rolled against, in arcminutes.
    pub dispersion: f64,
    /// The angle this particular shot strayed by, in arcminutes.
    pub angle: f64,
}

/// Convert arcminutes to radians.
pub fn arcmin_to_radians(arcmin: f64) -> f64 {
    (arcmin / 60.0).to_radians()
}

/// Roll a shot against `sources` at `range` tiles on a target `target_size` tiles across.
///
/// # Panics
///
/// Panics if `range` or `target_size` is not positive.
pub fn roll<R: Rng + ?Sized>(
    sources: &DispersionSources,
    range: f64,
    target_size: f64,
    rng: &mut R,
) -> AimResult {
    assert!(range > 0.0, "aim roll range must be positive, got {range}");
    assert!(target_size > 0.0, "aim roll target size must be positive, got {target_size}");

    let dispersion = sources.aggregate();
    let angle = roll_angle(dispersion, rng);
    // small-angle approximation
    let missed_by_tiles = range * arcmin_to_radians(angle);
    let missed_by = missed_by_tiles / target_size;

    log::trace!(
        "aim roll: dispersion {dispersion:.1}' angle {angle:.1}' missed by {missed_by:.3}"
    );

    AimResult {
        missed_by,
        missed_by_tiles,
        dispersion,
        angle,
    }
}

/// Draw a deviation angle in `[0, total]`.
///
/// Normal around `total / 2` with a quarter of `total` as standard
/// deviation, truncated to the range by redrawing. Zero dispersion never
/// misses and consumes no randomness.
fn roll_angle<R: Rng + ?Sized>(total: f64, rng: &mut R) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    loop {
        let z: f64 = StandardNormal.sample(rng);
        let angle = total / 2.0 + z * total / 4.0;
        if (0.0..=total).contains(&angle) {
            return angle;
        }
    }
}

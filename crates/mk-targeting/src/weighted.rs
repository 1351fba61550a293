//! Weighted random choice.

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

/// Pick index `i` with probability `weights[i] / sum(weights)`.
///
/// Draws fresh randomness on every call. Falls back to a uniform pick when
/// no weight is positive, and returns `None` only for an empty slice.
pub fn weighted_index<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }
    match WeightedIndex::new(weights) {
        Ok(dist) => Some(dist.sample(rng)),
        Err(_) => Some(rng.random_range(0..weights.len())),
    }
}

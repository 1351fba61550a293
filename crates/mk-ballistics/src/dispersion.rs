//! Dispersion sources and their aggregation.
//!
//! A shot's angular error comes from several independent places: the
//! weapon's own spread, the shooter's skill, recoil, aim time. Each is
//! recorded here in arcminutes and combined by [`DispersionSources::aggregate`]:
//!
//! - **normal** sources are independent random errors and add in quadrature
//! - **linear** sources are steady offsets and add directly
//! - **multipliers** scale the combined total

use serde::{Deserialize, Serialize};

/// Every contribution to a single shot's dispersion, in arcminutes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispersionSources {
    /// Independent random errors, combined as `sqrt(sum(x^2))`.
    pub normal_sources: Vec<f64>,
    /// Steady offsets, summed.
    pub linear_sources: Vec<f64>,
    /// Factors applied to the combined total.
    pub multipliers: Vec<f64>,
}

impl DispersionSources {
    /// Start from a single normal source. A zero source is not recorded.
    ///
    /// # Panics
    ///
    /// Panics if `normal` is negative or not finite.
    pub fn new(normal: f64) -> Self {
        check_source("normal", normal);
        if normal <= 0.0 {
            return Self::default();
        }
        Self::default().add_normal(normal)
    }

    /// Add an independent random error.
    ///
    /// # Panics
    ///
    /// Panics if `value` is negative or not finite.
    pub fn add_normal(mut self, value: f64) -> Self {
        check_source("normal", value);
        self.normal_sources.push(value);
        self
    }

    /// Add a steady offset (recoil, range penalty, vehicle sway).
    ///
    /// # Panics
    ///
    /// Panics if `value` is negative or not finite.
    pub fn add_range(mut self, value: f64) -> Self {
        check_source("linear", value);
        self.linear_sources.push(value);
        self
    }

    /// Scale the whole total (bracing, unsteady footing).
    ///
    /// # Panics
    ///
    /// Panics if `value` is negative or not finite.
    pub fn add_multiplier(mut self, value: f64) -> Self {
        check_source("multiplier", value);
        self.multipliers.push(value);
        self
    }

    /// Combine every source into one dispersion value in arcminutes.
    ///
    /// Never negative. Order within each list does not matter and a
    /// zero-valued normal or linear source leaves the result unchanged.
    pub fn aggregate(&self) -> f64 {
        let normal = self
            .normal_sources
            .iter()
            .map(|x| x * x)
            .sum::<f64>()
            .sqrt();
        let linear: f64 = self.linear_sources.iter().sum();
        let scale: f64 = self.multipliers.iter().product();
        ((normal + linear) * scale).max(0.0)
    }

    /// The widest angle an aim roll can produce from these sources.
    pub fn max(&self) -> f64 {
        self.aggregate()
    }

    /// Returns true if no source has been recorded.
    pub fn is_empty(&self) -> bool {
        self.normal_sources.is_empty()
            && self.linear_sources.is_empty()
            && self.multipliers.is_empty()
    }
}

impl std::fmt::Display for DispersionSources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "normal: {:?}, linear: {:?}, multipliers: {:?}",
            self.normal_sources, self.linear_sources, self.multipliers
        )
    }
}

fn check_source(kind: &str, value: f64) {
    assert!(
        value.is_finite() && value >= 0.0,
        "{kind} dispersion source must be finite and non-negative, got {value}"
    );
}

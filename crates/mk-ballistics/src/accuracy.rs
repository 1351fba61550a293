//! Hit quality tiers and the accuracy ladder that grades a shot.

use serde::{Deserialize, Serialize};

use crate::error::{BallisticsError, BallisticsResult};

/// How cleanly a connecting shot landed, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HitQuality {
    /// A perfect shot.
    Headshot,
    /// A critical hit.
    Critical,
    /// A solid hit.
    Good,
    /// An ordinary hit.
    Standard,
    /// The shot barely clipped the target.
    Grazing,
}

impl HitQuality {
    /// Every tier, strictest first.
    pub const ALL: [HitQuality; 5] = [
        HitQuality::Headshot,
        HitQuality::Critical,
        HitQuality::Good,
        HitQuality::Standard,
        HitQuality::Grazing,
    ];

    /// Returns true for the tiers that count as critical hits.
    pub fn is_critical(self) -> bool {
        matches!(self, Self::Headshot | Self::Critical)
    }
}

impl std::fmt::Display for HitQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Headshot => write!(f, "headshot"),
            Self::Critical => write!(f, "critical"),
            Self::Good => write!(f, "good hit"),
            Self::Standard => write!(f, "standard"),
            Self::Grazing => write!(f, "grazing"),
        }
    }
}

/// Upper `missed_by` bounds for each [`HitQuality`].
///
/// Stricter tiers have smaller thresholds. A shot whose value exceeds
/// `grazing` does not connect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccuracyLadder {
    /// Bound for [`HitQuality::Headshot`] (default: 0.1).
    pub headshot: f64,
    /// Bound for [`HitQuality::Critical`] (default: 0.2).
    pub critical: f64,
    /// Bound for [`HitQuality::Good`] (default: 0.5).
    pub goodhit: f64,
    /// Bound for [`HitQuality::Standard`] (default: 0.8).
    pub standard: f64,
    /// Bound for [`HitQuality::Grazing`] (default: 1.0).
    pub grazing: f64,
}

impl Default for AccuracyLadder {
    fn default() -> Self {
        Self {
            headshot: 0.1,
            critical: 0.2,
            goodhit: 0.5,
            standard: 0.8,
            grazing: 1.0,
        }
    }
}

impl AccuracyLadder {
    /// Set the headshot threshold.
    pub fn with_headshot(mut self, value: f64) -> Self {
        self.headshot = value;
        self
    }

    /// Set the critical threshold.
    pub fn with_critical(mut self, value: f64) -> Self {
        self.critical = value;
        self
    }

    /// Set the good hit threshold.
    pub fn with_goodhit(mut self, value: f64) -> Self {
        self.goodhit = value;
        self
    }

    /// Set the standard threshold.
    pub fn with_standard(mut self, value: f64) -> Self {
        self.standard = value;
        self
    }

    /// Set the grazing threshold.
    pub fn with_grazing(mut self, value: f64) -> Self {
        self.grazing = value;
        self
    }

    /// The upper bound for `tier`.
    pub fn threshold(&self, tier: HitQuality) -> f64 {
        match tier {
            HitQuality::Headshot => self.headshot,
            HitQuality::Critical => self.critical,
            HitQuality::Good => self.goodhit,
            HitQuality::Standard => self.standard,
            HitQuality::Grazing => self.grazing,
        }
    }

    /// Each tier with its threshold, strictest first.
    pub fn tiers(&self) -> impl Iterator<Item = (HitQuality, f64)> + '_ {
        HitQuality::ALL
            .into_iter()
            .map(move |tier| (tier, self.threshold(tier)))
    }

    /// The strictest tier whose threshold is at or above `missed_by`.
    ///
    /// Returns `None` when the shot is beyond the grazing threshold.
    pub fn classify(&self, missed_by: f64) -> Option<HitQuality> {
        self.tiers()
            .find(|&(_, threshold)| missed_by <= threshold)
            .map(|(tier, _)| tier)
    }

    /// Check that thresholds are positive, finite, and strictly increasing.
    pub fn validate(&self) -> BallisticsResult<()> {
        let mut previous: Option<(HitQuality, f64)> = None;
        for (tier, threshold) in self.tiers() {
            if !threshold.is_finite() || threshold <= 0.0 {
                return Err(BallisticsError::InvalidLadder(format!(
                    "{tier} threshold must be positive, got {threshold}"
                )));
            }
            if let Some((prev_tier, prev)) = previous {
                if threshold <= prev {
                    return Err(BallisticsError::InvalidLadder(format!(
                        "{tier} threshold {threshold} must exceed {prev_tier} threshold {prev}"
                    )));
                }
            }
            previous = Some((tier, threshold));
        }
        Ok(())
    }
}

//! Configuration for attack resolution.

use serde::{Deserialize, Serialize};

use crate::accuracy::AccuracyLadder;
use crate::error::{BallisticsError, BallisticsResult};

/// Tunables for [`crate::Attacker`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackConfig {
    /// Thresholds that grade a shot.
    pub ladder: AccuracyLadder,
    /// Half-width of the uniform noise added to `missed_by` before picking
    /// the struck part (default: 0.5).
    pub hit_spread: f64,
    /// Low end of the value range handed to the targeting graph (default: -0.5).
    pub select_min: f64,
    /// High end of the value range handed to the targeting graph (default: 1.5).
    pub select_max: f64,
}

impl Default for AttackConfig {
    fn default() -> Self {
        Self {
            ladder: AccuracyLadder::default(),
            hit_spread: 0.5,
            select_min: -0.5,
            select_max: 1.5,
        }
    }
}

impl AttackConfig {
    /// Load a configuration from JSON, filling omitted fields from defaults.
    pub fn from_json(json: &str) -> BallisticsResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the accuracy ladder.
    pub fn with_ladder(mut self, ladder: AccuracyLadder) -> Self {
        self.ladder = ladder;
        self
    }

    /// Set the hit-location noise half-width.
    pub fn with_hit_spread(mut self, spread: f64) -> Self {
        self.hit_spread = spread;
        self
    }

    /// Set the value range handed to the targeting graph.
    pub fn with_select_range(mut self, min: f64, max: f64) -> Self {
        self.select_min = min;
        self.select_max = max;
        self
    }

    /// Check every value is usable.
    pub fn validate(&self) -> BallisticsResult<()> {
        self.ladder.validate()?;
        if !self.hit_spread.is_finite() || self.hit_spread < 0.0 {
            return Err(BallisticsError::InvalidConfig(format!(
                "hit_spread must be finite and non-negative, got {}",
                self.hit_spread
            )));
        }
        if !self.select_min.is_finite()
            || !self.select_max.is_finite()
            || self.select_min >= self.select_max
        {
            return Err(BallisticsError::InvalidConfig(format!(
                "select range {}..{} is empty",
                self.select_min, self.select_max
            )));
        }
        Ok(())
    }
}

//! Attack orchestration: aim roll, grading, and hit location.

use std::fmt::Debug;

use mk_targeting::TargetingGraph;
use rand::Rng;

use crate::accuracy::HitQuality;
use crate::aim::{self, AimResult};
use crate::config::AttackConfig;
use crate::dispersion::DispersionSources;
use crate::error::BallisticsResult;

/// Everything needed to resolve one ranged attack.
#[derive(Debug, Clone)]
pub struct AttackRequest {
    /// The shot's dispersion sources.
    pub dispersion: DispersionSources,
    /// Distance to the target in tiles.
    pub range: f64,
    /// Apparent size of the target in tiles.
    pub target_size: f64,
    /// How much of the shot the target slipped (0 to 1), added to `missed_by`.
    pub evasion: f64,
    /// Always strike the target's center part.
    pub unerring: bool,
}

impl AttackRequest {
    /// Create a request with no evasion.
    pub fn new(dispersion: DispersionSources, range: f64, target_size: f64) -> Self {
        Self {
            dispersion,
            range,
            target_size,
            evasion: 0.0,
            unerring: false,
        }
    }

    /// Set the evasion fraction (clamped to 0-1 when resolved).
    pub fn with_evasion(mut self, evasion: f64) -> Self {
        self.evasion = evasion;
        self
    }

    /// Mark the shot as unerring.
    pub fn unerring(mut self) -> Self {
        self.unerring = true;
        self
    }
}

/// The result of one ranged attack, ready for damage calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackOutcome<T> {
    /// The raw aim roll.
    pub aim: AimResult,
    /// `missed_by` plus evasion; the value the ladder graded.
    pub goodhit: f64,
    /// Hit quality, or `None` if the shot did not connect.
    pub quality: Option<HitQuality>,
    /// The struck part, for connecting hits on targets with an anatomy.
    pub part: Option<T>,
}

impl<T> AttackOutcome<T> {
    /// Returns true if the shot connected.
    pub fn connected(&self) -> bool {
        self.quality.is_some()
    }
}

/// Fraction of a shot a target avoids given its avoidance roll and the
/// projectile's difficulty roll, clamped to 0-1.
pub fn evasion_fraction(avoid: f64, difficulty: f64) -> f64 {
    if difficulty <= 0.0 {
        return 1.0;
    }
    (avoid / difficulty).clamp(0.0, 1.0)
}

/// Resolves ranged attacks under one [`AttackConfig`].
#[derive(Debug, Clone, Default)]
pub struct Attacker {
    config: AttackConfig,
}

impl Attacker {
    /// Create an attacker with the given configuration.
    ///
    /// Fails if the configuration does not pass [`AttackConfig::validate`].
    pub fn new(config: AttackConfig) -> BallisticsResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &AttackConfig {
        &self.config
    }

    /// Roll, grade, and locate one attack.
    ///
    /// `anatomy` is the target's targeting graph, if it has one; targets
    /// without one never report a struck part.
    ///
    /// # Panics
    ///
    /// Panics if the request's range or target size is not positive.
    pub fn resolve<T, R>(
        &self,
        request: &AttackRequest,
        anatomy: Option<&TargetingGraph<T>>,
        rng: &mut R,
    ) -> AttackOutcome<T>
    where
        T: Clone + Debug,
        R: Rng + ?Sized,
    {
        let aim = aim::roll(&request.dispersion, request.range, request.target_size, rng);
        let goodhit = aim.missed_by + request.evasion.clamp(0.0, 1.0);
        let quality = self.config.ladder.classify(goodhit);

        let part = match (quality, anatomy) {
            (Some(_), Some(graph)) => {
                let value = if request.unerring {
                    self.config.select_min
                } else {
                    let spread = self.config.hit_spread;
                    aim.missed_by + rng.random_range(-spread..=spread)
                };
                Some(
                    graph
                        .select(self.config.select_min, self.config.select_max, value, rng)
                        .clone(),
                )
            }
            _ => None,
        };

        match (&quality, &part) {
            (Some(q), Some(p)) => log::debug!("{q} on {p:?} (goodhit {goodhit:.3})"),
            (Some(q), None) => log::debug!("{q} (goodhit {goodhit:.3})"),
            (None, _) => log::debug!("missed (goodhit {goodhit:.3})"),
        }

        AttackOutcome {
            aim,
            goodhit,
            quality,
            part,
        }
    }
}

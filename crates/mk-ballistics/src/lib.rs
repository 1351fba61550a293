//! Ranged attack resolution.
//!
//! Turns a shot's [`DispersionSources`] into an [`AimResult`] via a random
//! aim roll, grades the result on an [`AccuracyLadder`], and for articulated
//! targets asks a [`mk_targeting::TargetingGraph`] which part took the hit.
//! The [`Attacker`] sequences those steps; damage is left to the caller.

pub mod accuracy;
pub mod aim;
pub mod anatomy;
pub mod attack;
pub mod config;
pub mod dispersion;
pub mod error;
pub mod estimate;

pub use accuracy::{AccuracyLadder, HitQuality};
pub use aim::{AimResult, roll};
pub use anatomy::{Anatomy, BodyPartDef};
pub use attack::{AttackOutcome, AttackRequest, Attacker, evasion_fraction};
pub use config::AttackConfig;
pub use dispersion::DispersionSources;
pub use error::{BallisticsError, BallisticsResult};
pub use estimate::{ChanceEstimate, estimate_chances};

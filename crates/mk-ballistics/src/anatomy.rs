//! Anatomy content: body parts, how they connect, and how big they are.

use std::collections::HashMap;

use mk_targeting::TargetingGraph;
use serde::{Deserialize, Serialize};

use crate::error::{BallisticsError, BallisticsResult};

/// One body part as written in content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyPartDef {
    /// Unique part id (e.g. "arm_l").
    pub id: String,
    /// The more central part this one hangs off. The center names itself.
    pub connected_to: String,
    /// Relative size of the part as a target.
    pub hit_size: f64,
}

/// A creature's body plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anatomy {
    /// Anatomy id (e.g. "human").
    pub id: String,
    /// The part at the center of mass.
    pub center: String,
    /// Every part, center included.
    pub parts: Vec<BodyPartDef>,
}

impl Anatomy {
    /// Parse an anatomy from JSON.
    pub fn from_json(json: &str) -> BallisticsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up a part definition by id.
    pub fn part(&self, id: &str) -> Option<&BodyPartDef> {
        self.parts.iter().find(|p| p.id == id)
    }

    /// Build the targeting graph used to pick struck parts.
    ///
    /// Fails if the anatomy is empty, the center is not listed, a hit size is
    /// not positive, or a part's `connected_to` chain never reaches the center.
    pub fn targeting_graph(&self) -> BallisticsResult<TargetingGraph<String>> {
        if self.parts.is_empty() {
            return Err(BallisticsError::EmptyAnatomy(self.id.clone()));
        }
        if let Some(bad) = self
            .parts
            .iter()
            .find(|p| !p.hit_size.is_finite() || p.hit_size <= 0.0)
        {
            return Err(BallisticsError::InvalidHitSize {
                part: bad.id.clone(),
                size: bad.hit_size,
            });
        }

        let by_id: HashMap<&str, &BodyPartDef> =
            self.parts.iter().map(|p| (p.id.as_str(), p)).collect();
        if !by_id.contains_key(self.center.as_str()) {
            return Err(BallisticsError::MissingCenter(self.center.clone()));
        }

        let ids: Vec<String> = self.parts.iter().map(|p| p.id.clone()).collect();
        let graph = TargetingGraph::generate(
            self.center.clone(),
            &ids,
            |id: &String| {
                by_id
                    .get(id.as_str())
                    .map_or_else(|| id.clone(), |p| p.connected_to.clone())
            },
            |id: &String| by_id.get(id.as_str()).map_or(0.0, |p| p.hit_size),
        )?;
        log::debug!(
            "anatomy '{}' targeting graph ready ({} parts)",
            self.id,
            graph.part_count()
        );
        Ok(graph)
    }
}

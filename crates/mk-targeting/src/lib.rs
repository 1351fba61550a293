//! Weighted targeting graphs.
//!
//! A [`TargetingGraph`] is a rooted tree over the sub-parts of a target
//! (limbs of a creature, sections of a vehicle), built once from a center
//! part, a part list, and two pure functions: which neighbor is more central,
//! and how big each part is. Every connecting hit then asks the graph which
//! part absorbed it via [`TargetingGraph::select`].

pub mod error;
pub mod graph;
pub mod weighted;

pub use error::{TargetingError, TargetingResult};
pub use graph::{NodeId, TargetNode, TargetingGraph};
pub use weighted::weighted_index;

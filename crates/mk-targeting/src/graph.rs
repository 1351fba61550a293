//! Targeting graph construction and hit selection.
//!
//! Nodes live in a single arena owned by the graph and refer to each other by
//! [`NodeId`]. The root (index 0) is the target's center of mass; every other
//! node hangs off the neighbor its `connection` function names as more
//! central. The tree is immutable once built, so one graph per anatomy can be
//! shared read-only by any number of concurrent attacks.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use rand::Rng;

use crate::error::{TargetingError, TargetingResult};
use crate::weighted::weighted_index;

/// Index of a node inside its [`TargetingGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node of every graph.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of this node in the graph's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One sub-part of a target.
#[derive(Debug, Clone)]
pub struct TargetNode<T> {
    val: T,
    weight: f64,
    parent: Option<NodeId>,
    connections: Vec<NodeId>,
}

impl<T> TargetNode<T> {
    /// The part this node stands for.
    pub fn val(&self) -> &T {
        &self.val
    }

    /// The part's own hit weight (its apparent size).
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The more central neighbor, or `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Less central neighbors, in the order the parts were listed.
    pub fn connections(&self) -> &[NodeId] {
        &self.connections
    }

    /// Returns true for extremities (nodes with no connections).
    pub fn is_leaf(&self) -> bool {
        self.connections.is_empty()
    }
}

/// A weighted tree over a target's sub-parts.
#[derive(Debug, Clone)]
pub struct TargetingGraph<T> {
    nodes: Vec<TargetNode<T>>,
    lookup: HashMap<T, NodeId>,
}

impl<T> TargetingGraph<T>
where
    T: Clone + Eq + Hash + Debug,
{
    /// Build the graph rooted at `center` from `parts`.
    ///
    /// `connection(p)` names the more central neighbor of `p` (the center
    /// names itself) and `weight(p)` its hit weight. The center may or may not
    /// appear in `parts`; repeated parts are only placed once.
    ///
    /// Returns [`TargetingError::Detached`] when a part's connection chain
    /// never reaches the center.
    ///
    /// # Panics
    ///
    /// Panics if `parts` is empty, a weight is negative or not finite, or the
    /// center's weight is zero. Other parts may weigh zero; they are only
    /// struck when a fork offers nothing heavier.
    pub fn generate<C, W>(center: T, parts: &[T], connection: C, weight: W) -> TargetingResult<Self>
    where
        C: Fn(&T) -> T,
        W: Fn(&T) -> f64,
    {
        assert!(!parts.is_empty(), "targeting graph needs at least one part");

        // more central part -> less central parts, in listing order
        let mut edges: HashMap<T, Vec<T>> = HashMap::new();
        let mut listed: HashSet<&T> = HashSet::new();
        for part in parts {
            if *part == center {
                continue;
            }
            if !listed.insert(part) {
                log::warn!("part {part:?} listed more than once; placing it once");
                continue;
            }
            let toward_center = connection(part);
            edges.entry(toward_center).or_default().push(part.clone());
        }

        let mut graph = Self {
            nodes: Vec::with_capacity(listed.len() + 1),
            lookup: HashMap::with_capacity(listed.len() + 1),
        };
        let root_weight = checked_weight(&center, &weight);
        assert!(root_weight > 0.0, "center {center:?} must have a positive weight");
        graph.push(center, root_weight, None);

        let mut queue = VecDeque::from([NodeId::ROOT]);
        while let Some(current) = queue.pop_front() {
            let Some(children) = edges.remove(&graph.nodes[current.0].val) else {
                continue;
            };
            for child in children {
                let child_weight = checked_weight(&child, &weight);
                let id = graph.push(child, child_weight, Some(current));
                graph.nodes[current.0].connections.push(id);
                queue.push_back(id);
            }
        }

        if !edges.is_empty() {
            let mut detached: Vec<String> = edges
                .into_values()
                .flatten()
                .map(|part| format!("{part:?}"))
                .collect();
            detached.sort();
            return Err(TargetingError::Detached(detached));
        }

        log::debug!(
            "generated targeting graph: {} parts, depth {}",
            graph.nodes.len(),
            graph.depth()
        );
        Ok(graph)
    }

    /// Look up the node standing for `part`.
    pub fn get(&self, part: &T) -> Option<&TargetNode<T>> {
        self.lookup.get(part).map(|id| &self.nodes[id.0])
    }

    /// Returns true if `part` is in the graph.
    pub fn contains(&self, part: &T) -> bool {
        self.lookup.contains_key(part)
    }

    /// The less central neighbors of `part`. Empty for leaves and unknown parts.
    pub fn children(&self, part: &T) -> Vec<&T> {
        self.get(part)
            .map(|node| {
                node.connections
                    .iter()
                    .map(|id| &self.nodes[id.0].val)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The more central neighbor of `part`. `None` for the root and unknown parts.
    pub fn parent(&self, part: &T) -> Option<&T> {
        let parent = self.get(part)?.parent?;
        Some(&self.nodes[parent.0].val)
    }
}

impl<T> TargetingGraph<T> {
    /// The root node (the target's center of mass).
    pub fn root(&self) -> &TargetNode<T> {
        &self.nodes[NodeId::ROOT.0]
    }

    /// The node at `id`, if it belongs to this graph.
    pub fn node(&self, id: NodeId) -> Option<&TargetNode<T>> {
        self.nodes.get(id.0)
    }

    /// Number of parts in the graph, root included. Never zero.
    pub fn part_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate over every node in breadth-first order from the root.
    pub fn iter(&self) -> impl Iterator<Item = &TargetNode<T>> {
        self.nodes.iter()
    }

    /// Longest root-to-leaf edge count.
    pub fn depth(&self) -> usize {
        let mut depths = vec![0usize; self.nodes.len()];
        // arena is in breadth-first order, so parents precede children
        for (i, node) in self.nodes.iter().enumerate() {
            if let Some(parent) = node.parent {
                depths[i] = depths[parent.0] + 1;
            }
        }
        depths.into_iter().max().unwrap_or(0)
    }

    /// Build one root-to-leaf path by weighted choice at every fork.
    ///
    /// Each step picks a connection with probability proportional to that
    /// connection's own weight, not the weight of the subtree behind it.
    pub fn select_path<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<NodeId> {
        let mut path = vec![NodeId::ROOT];
        let mut current = &self.nodes[NodeId::ROOT.0];
        while !current.connections.is_empty() {
            let weights: Vec<f64> = current
                .connections
                .iter()
                .map(|id| self.nodes[id.0].weight)
                .collect();
            let pick = weighted_index(&weights, rng).unwrap_or(0);
            let next = current.connections[pick];
            path.push(next);
            current = &self.nodes[next.0];
        }
        path
    }

    /// Pick the part struck by a hit of accuracy `value`.
    ///
    /// A fresh path is drawn on every call. `range_min..range_max` is spread
    /// across the path in proportion to each node's weight, root first; the
    /// first node whose cumulative share exceeds `value - range_min` is hit.
    /// Values at or below `range_min` strike the root, values at or above
    /// `range_max` strike the path's leaf. The root always weighs more than
    /// zero, so every path carries weight.
    ///
    /// # Panics
    ///
    /// Panics if `range_min >= range_max`.
    pub fn select<R: Rng + ?Sized>(
        &self,
        range_min: f64,
        range_max: f64,
        value: f64,
        rng: &mut R,
    ) -> &T {
        assert!(range_min < range_max, "select range is empty: {range_min} >= {range_max}");

        let path = self.select_path(rng);
        let leaf = path.last().copied().unwrap_or(NodeId::ROOT);

        let total_weight: f64 = path.iter().map(|id| self.nodes[id.0].weight).sum();
        let shifted = value - range_min;
        let scale = (range_max - range_min) / total_weight;
        let mut acc = 0.0;
        for id in &path {
            let node = &self.nodes[id.0];
            acc += node.weight * scale;
            if acc > shifted {
                log::trace!(
                    "value {value:.3} struck node {} on a {}-node path",
                    id.0,
                    path.len()
                );
                return &node.val;
            }
        }
        &self.nodes[leaf.0].val
    }
}

impl<T> TargetingGraph<T>
where
    T: Clone + Eq + Hash,
{
    fn push(&mut self, val: T, weight: f64, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.lookup.insert(val.clone(), id);
        self.nodes.push(TargetNode {
            val,
            weight,
            parent,
            connections: Vec::new(),
        });
        id
    }
}

fn checked_weight<T: Debug, W: Fn(&T) -> f64>(part: &T, weight: &W) -> f64 {
    let w = weight(part);
    assert!(w.is_finite() && w >= 0.0, "part {part:?} has invalid weight {w}");
    w
}

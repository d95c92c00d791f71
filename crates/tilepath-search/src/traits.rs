use tilepath_core::{Bounds, Point};

use crate::error::Result;
use crate::node::{Cost, Node, NodeId};

/// A bounded grid of [`Node`]s that a search runs over.
///
/// The grid owns the nodes; the engine only reads position and walkability
/// and writes the cost fields and back-pointers through [`node_mut`].
///
/// [`node_mut`]: GridModel::node_mut
pub trait GridModel {
    /// Rectangle covered by the grid.
    fn bounds(&self) -> Bounds;

    /// Whether `p` may be used as a start or goal coordinate.
    fn valid_coordinate(&self, p: Point) -> bool;

    /// Node at `p`, or `None` for out-of-range or missing cells.
    fn node_at(&self, p: Point) -> Option<NodeId>;

    fn node(&self, id: NodeId) -> &Node;

    fn node_mut(&mut self, id: NodeId) -> &mut Node;

    /// Number of nodes the grid holds.
    fn node_count(&self) -> usize;

    /// The designated start node.
    fn start_node(&self) -> Result<NodeId>;

    /// The designated goal node.
    fn goal_node(&self) -> Result<NodeId>;
}

/// Pluggable cost rules of a search.
pub trait CostModel {
    /// Cost of stepping from `from` onto the adjacent node `to`. Must be > 0.
    fn step_cost(&self, from: &Node, to: &Node) -> Cost;

    /// Estimate of the remaining cost from `node` to `goal`.
    /// Must never overestimate for the search to return shortest paths.
    fn estimate(&self, node: &Node, goal: &Node) -> Cost;
}

impl<C: CostModel + ?Sized> CostModel for &C {
    fn step_cost(&self, from: &Node, to: &Node) -> Cost {
        (**self).step_cost(from, to)
    }

    fn estimate(&self, node: &Node, goal: &Node) -> Cost {
        (**self).estimate(node, goal)
    }
}

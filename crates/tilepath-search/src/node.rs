use std::fmt;

use tilepath_core::{Bounds, Point};

/// Path cost unit shared by step costs, heuristics and accumulated costs.
pub type Cost = i32;

/// Handle to a [`Node`] stored in a [`NodeArena`].
///
/// Back-pointers are stored as handles, never references, so a node graph can
/// be rewired between searches without any lifetime ties to the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of this node inside its arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// Per-cell search state.
///
/// Position and walkability belong to the grid; the cost fields and the
/// back-pointer are written by the search engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pos: Point,
    walkable: bool,
    past_cost: Cost,
    future_cost: Cost,
    previous: Option<NodeId>,
}

impl Node {
    /// A walkable node at `pos` with zeroed costs and no predecessor.
    pub fn new(pos: Point) -> Self {
        Self {
            pos,
            walkable: true,
            past_cost: 0,
            future_cost: 0,
            previous: None,
        }
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn is_walkable(&self) -> bool {
        self.walkable
    }

    #[inline]
    pub fn set_walkable(&mut self, walkable: bool) {
        self.walkable = walkable;
    }

    /// Predecessor on the best path found so far.
    #[inline]
    pub fn previous(&self) -> Option<NodeId> {
        self.previous
    }

    #[inline]
    pub fn set_previous(&mut self, previous: Option<NodeId>) {
        self.previous = previous;
    }

    /// Accumulated cost from the start (g).
    #[inline]
    pub fn past_cost(&self) -> Cost {
        self.past_cost
    }

    /// Heuristic estimate to the goal (h).
    #[inline]
    pub fn future_cost(&self) -> Cost {
        self.future_cost
    }

    /// Selection priority (f = g + h).
    #[inline]
    pub fn total_cost(&self) -> Cost {
        self.past_cost.saturating_add(self.future_cost)
    }

    pub(crate) fn set_past_cost(&mut self, cost: Cost) {
        self.past_cost = cost;
    }

    pub(crate) fn set_future_cost(&mut self, cost: Cost) {
        self.future_cost = cost;
    }
}

// ---------------------------------------------------------------------------
// NodeArena
// ---------------------------------------------------------------------------

/// Flat, row-major storage for one [`Node`] per cell of a rectangle.
///
/// Grids embed an arena and delegate the storage half of
/// [`GridModel`](crate::GridModel) to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeArena {
    bounds: Bounds,
    width: usize,
    nodes: Vec<Node>,
}

impl NodeArena {
    /// Create an arena of walkable nodes covering `bounds`.
    pub fn new(bounds: Bounds) -> Self {
        let width = bounds.width().max(0) as usize;
        let nodes = bounds.iter().map(Node::new).collect();
        Self {
            bounds,
            width,
            nodes,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Handle of the node at `p`, or `None` outside the arena.
    #[inline]
    pub fn id(&self, p: Point) -> Option<NodeId> {
        if !self.bounds.contains(p) {
            return None;
        }
        let x = (p.x - self.bounds.min.x) as usize;
        let y = (p.y - self.bounds.min.y) as usize;
        Some(NodeId(y * self.width + x))
    }

    /// Position of the node behind `id`.
    #[inline]
    pub fn point(&self, id: NodeId) -> Point {
        let x = (id.0 % self.width) as i32 + self.bounds.min.x;
        let y = (id.0 / self.width) as i32 + self.bounds.min.y;
        Point::new(x, y)
    }

    /// # Panics
    ///
    /// Panics if `id` was not issued by this arena.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// # Panics
    ///
    /// Panics if `id` was not issued by this arena.
    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Iterate over every node with its handle, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }
}

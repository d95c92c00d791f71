use tilepath_core::Point;

use crate::costs::GridCosts;
use crate::node::{Cost, NodeId};
use crate::traits::{CostModel, GridModel};

/// A* search over a [`GridModel`], with costs supplied by a [`CostModel`].
///
/// The engine owns its grid for the duration of its life, so a search has
/// exclusive access to the node cost fields it rewrites. Open/closed
/// bookkeeping lives in the engine and is rebuilt at the start of every
/// [`find_path`](SearchEngine::find_path) call; scratch buffers are reused
/// between calls.
pub struct SearchEngine<G, C = GridCosts> {
    pub(crate) grid: G,
    pub(crate) costs: C,
    // Open set in insertion order; `in_open` mirrors it by node index.
    pub(crate) open: Vec<NodeId>,
    pub(crate) in_open: Vec<bool>,
    pub(crate) closed: Vec<bool>,
    pub(crate) closed_len: usize,
    // scratch buffers for neighbor expansion
    pub(crate) pbuf: Vec<Point>,
    pub(crate) adjbuf: Vec<NodeId>,
}

impl<G: GridModel> SearchEngine<G, GridCosts> {
    /// Engine with the default straight/diagonal [`GridCosts`].
    pub fn with_grid_costs(grid: G) -> Self {
        Self::new(grid, GridCosts::default())
    }
}

impl<G: GridModel, C: CostModel> SearchEngine<G, C> {
    pub fn new(grid: G, costs: C) -> Self {
        Self {
            grid,
            costs,
            open: Vec::new(),
            in_open: Vec::new(),
            closed: Vec::new(),
            closed_len: 0,
            pbuf: Vec::with_capacity(8),
            adjbuf: Vec::with_capacity(8),
        }
    }

    #[inline]
    pub fn grid(&self) -> &G {
        &self.grid
    }

    /// Mutable access to the grid, e.g. to edit walkability between searches.
    #[inline]
    pub fn grid_mut(&mut self) -> &mut G {
        &mut self.grid
    }

    #[inline]
    pub fn costs(&self) -> &C {
        &self.costs
    }

    pub fn into_grid(self) -> G {
        self.grid
    }

    /// Whether `id` is in the open set of the last search.
    #[inline]
    pub fn is_open(&self, id: NodeId) -> bool {
        self.in_open.get(id.index()).copied().unwrap_or(false)
    }

    /// Whether `id` was finalized by the last search.
    #[inline]
    pub fn is_closed(&self, id: NodeId) -> bool {
        self.closed.get(id.index()).copied().unwrap_or(false)
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    pub fn closed_count(&self) -> usize {
        self.closed_len
    }

    /// Positions of the nodes of a path returned by this engine.
    pub fn path_points(&self, path: &[NodeId]) -> Vec<Point> {
        path.iter()
            .map(|&id| self.grid.node(id).position())
            .collect()
    }

    /// Accumulated cost of a path returned by this engine; 0 when empty.
    pub fn path_cost(&self, path: &[NodeId]) -> Cost {
        path.last()
            .map_or(0, |&id| self.grid.node(id).past_cost())
    }

    pub(crate) fn reset(&mut self) {
        let n = self.grid.node_count();
        self.open.clear();
        self.in_open.clear();
        self.in_open.resize(n, false);
        self.closed.clear();
        self.closed.resize(n, false);
        self.closed_len = 0;
    }

    pub(crate) fn push_open(&mut self, id: NodeId) {
        self.open.push(id);
        self.in_open[id.index()] = true;
    }

    pub(crate) fn close(&mut self, id: NodeId) {
        self.closed[id.index()] = true;
        self.closed_len += 1;
    }

    /// Remove and return the open node with the lowest total cost.
    ///
    /// Ties go to the node scanned first.
    pub(crate) fn pop_cheapest(&mut self) -> Option<NodeId> {
        let first = *self.open.first()?;
        let mut best = 0;
        let mut best_cost = self.grid.node(first).total_cost();
        for (i, &id) in self.open.iter().enumerate().skip(1) {
            let cost = self.grid.node(id).total_cost();
            if cost < best_cost {
                best = i;
                best_cost = cost;
            }
        }
        let id = self.open.remove(best);
        self.in_open[id.index()] = false;
        Some(id)
    }
}

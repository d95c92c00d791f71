use tracing::warn;

use crate::engine::SearchEngine;
use crate::error::{Result, SearchError};
use crate::node::NodeId;
use crate::traits::{CostModel, GridModel};

impl<G: GridModel, C: CostModel> SearchEngine<G, C> {
    /// Follow back-pointers from `goal` to `start` and return the path in
    /// start→goal order.
    ///
    /// Every node on a valid chain is closed, so the walk takes at most
    /// `closed_count()` steps; a longer walk or a missing back-pointer is
    /// reported as [`SearchError::BrokenPath`].
    pub(crate) fn calc_path(&self, start: NodeId, goal: NodeId) -> Result<Vec<NodeId>> {
        let limit = self.closed_len;
        let mut path = vec![goal];
        let mut cur = goal;
        let mut steps = 0;

        while cur != start {
            let prev = match self.grid.node(cur).previous() {
                Some(prev) if steps < limit => prev,
                _ => {
                    let err = SearchError::BrokenPath {
                        start: self.grid.node(start).position(),
                        goal: self.grid.node(goal).position(),
                        steps,
                    };
                    warn!(error = %err, "path reconstruction failed");
                    return Err(err);
                }
            };
            path.push(prev);
            cur = prev;
            steps += 1;
        }

        path.reverse();
        Ok(path)
    }
}

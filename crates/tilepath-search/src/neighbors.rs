use tilepath_core::Point;
use tracing::trace;

use crate::engine::SearchEngine;
use crate::node::NodeId;
use crate::traits::{CostModel, GridModel};

/// Append the candidate neighbor coordinates of `p` to `buf`, in scan order:
///
/// 1. column `x + 1`, rows `y - 1 ..= y + 1`;
/// 2. `(x, y + 1)`;
/// 3. column `x - 1`, rows `y - 1 ..= y + 1`, only if `x - 1 > 0`;
/// 4. `(x, y - 1)`, only if `y - 1 > 0`.
///
/// Column rows are kept only when `row > 0`. There are no upper-bound
/// checks: callers rely on the grid lookup to reject coordinates past the
/// far edges. The shape is not a symmetric 8-neighborhood;
/// column 0 in particular can only be entered from column 0.
pub fn candidate_points(p: Point, buf: &mut Vec<Point>) {
    if let Some(x) = p.x.checked_add(1) {
        push_column(x, p.y, buf);
    }
    if let Some(y) = p.y.checked_add(1) {
        buf.push(Point::new(p.x, y));
    }
    // x - 1 > 0 and y - 1 > 0, without wrapping at i32::MIN
    if p.x > 1 {
        push_column(p.x - 1, p.y, buf);
    }
    if p.y > 1 {
        buf.push(Point::new(p.x, p.y - 1));
    }
}

fn push_column(x: i32, y: i32, buf: &mut Vec<Point>) {
    let rows = [y.checked_sub(1), Some(y), y.checked_add(1)];
    for row in rows.into_iter().flatten() {
        if row > 0 {
            buf.push(Point::new(x, row));
        }
    }
}

impl<G: GridModel, C: CostModel> SearchEngine<G, C> {
    /// Walkable, not yet closed neighbors of `id`, in scan order.
    pub fn find_adjacent_nodes_to(&mut self, id: NodeId) -> Vec<NodeId> {
        let mut adjacent = Vec::with_capacity(8);
        self.collect_adjacent(id, &mut adjacent);
        adjacent
    }

    pub(crate) fn collect_adjacent(&mut self, id: NodeId, out: &mut Vec<NodeId>) {
        let p = self.grid.node(id).position();
        let mut pbuf = std::mem::take(&mut self.pbuf);
        pbuf.clear();
        candidate_points(p, &mut pbuf);

        for &q in pbuf.iter() {
            let Some(n) = self.grid.node_at(q) else {
                continue;
            };
            if self.grid.node(n).is_walkable() && !self.is_closed(n) {
                out.push(n);
            }
        }

        trace!(
            node = %p,
            candidates = pbuf.len(),
            adjacent = ?self.path_points(out),
            "expanded"
        );
        self.pbuf = pbuf;
    }
}

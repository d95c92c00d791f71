//! Minimal in-memory grid used by the engine tests.

use tilepath_core::{Bounds, Point};

use crate::error::{Result, SearchError};
use crate::node::{Node, NodeArena, NodeId};
use crate::traits::GridModel;

#[derive(Debug, Clone)]
pub(crate) struct TestGrid {
    pub(crate) arena: NodeArena,
    start: Option<NodeId>,
    goal: Option<NodeId>,
}

impl TestGrid {
    pub(crate) fn open(width: i32, height: i32) -> Self {
        Self {
            arena: NodeArena::new(Bounds::with_size(width, height)),
            start: None,
            goal: None,
        }
    }

    /// `#` wall, `.` floor, `S` start, `G` goal.
    pub(crate) fn parse(layout: &str) -> Self {
        let rows: Vec<&str> = layout.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let width = rows.first().map_or(0, |r| r.chars().count()) as i32;
        let mut grid = Self::open(width, rows.len() as i32);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let id = grid.at(x as i32, y as i32);
                match ch {
                    '#' => grid.arena.node_mut(id).set_walkable(false),
                    'S' => grid.start = Some(id),
                    'G' => grid.goal = Some(id),
                    _ => {}
                }
            }
        }
        grid
    }

    pub(crate) fn at(&self, x: i32, y: i32) -> NodeId {
        self.arena.id(Point::new(x, y)).unwrap()
    }

    pub(crate) fn block(&mut self, x: i32, y: i32) {
        let id = self.at(x, y);
        self.arena.node_mut(id).set_walkable(false);
    }
}

impl GridModel for TestGrid {
    fn bounds(&self) -> Bounds {
        self.arena.bounds()
    }

    fn valid_coordinate(&self, p: Point) -> bool {
        self.arena.bounds().contains(p)
    }

    fn node_at(&self, p: Point) -> Option<NodeId> {
        self.arena.id(p)
    }

    fn node(&self, id: NodeId) -> &Node {
        self.arena.node(id)
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.arena.node_mut(id)
    }

    fn node_count(&self) -> usize {
        self.arena.len()
    }

    fn start_node(&self) -> Result<NodeId> {
        self.start.ok_or(SearchError::Undefined("start node"))
    }

    fn goal_node(&self) -> Result<NodeId> {
        self.goal.ok_or(SearchError::Undefined("goal node"))
    }
}

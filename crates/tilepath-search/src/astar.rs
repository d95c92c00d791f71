use tilepath_core::Point;
use tracing::{debug, debug_span, trace};

use crate::engine::SearchEngine;
use crate::error::{Endpoint, Result, SearchError};
use crate::node::{Cost, NodeId};
use crate::traits::{CostModel, GridModel};

impl<G: GridModel, C: CostModel> SearchEngine<G, C> {
    /// Compute a minimum-cost path from `from` to `to` using A*.
    ///
    /// Returns the nodes of the path, both endpoints included, or an empty
    /// vector if the goal cannot be reached. Coordinates rejected by the grid
    /// fail with [`SearchError::InvalidCoordinate`] before any node is
    /// touched.
    pub fn find_path(&mut self, from: Point, to: Point) -> Result<Vec<NodeId>> {
        let span = debug_span!("find_path", %from, %to);
        let _enter = span.enter();

        self.check_coordinate(Endpoint::Start, from)?;
        self.check_coordinate(Endpoint::Goal, to)?;
        let start = self
            .grid
            .node_at(from)
            .ok_or(SearchError::Undefined("start node"))?;
        let goal = self
            .grid
            .node_at(to)
            .ok_or(SearchError::Undefined("goal node"))?;

        self.reset();
        self.seed(start, goal);
        self.push_open(start);

        let mut adjacent = std::mem::take(&mut self.adjbuf);

        let outcome = loop {
            let Some(current) = self.pop_cheapest() else {
                break Ok(Vec::new());
            };
            self.close(current);

            let node = self.grid.node(current);
            trace!(node = %node.position(), f = node.total_cost(), "selected");
            if node.position() == to {
                break self.calc_path(start, current);
            }

            adjacent.clear();
            self.collect_adjacent(current, &mut adjacent);
            for &n in adjacent.iter() {
                self.relax(current, n, goal);
            }
        };

        self.adjbuf = adjacent;

        if let Ok(path) = &outcome {
            if path.is_empty() {
                debug!(closed = self.closed_len, "open set exhausted, no path");
            } else {
                debug!(
                    closed = self.closed_len,
                    len = path.len(),
                    cost = self.path_cost(path),
                    "path found"
                );
            }
        }
        outcome
    }

    /// [`find_path`](Self::find_path) taking raw coordinates.
    pub fn find_path_xy(
        &mut self,
        from_x: i32,
        from_y: i32,
        to_x: i32,
        to_y: i32,
    ) -> Result<Vec<NodeId>> {
        self.find_path(Point::new(from_x, from_y), Point::new(to_x, to_y))
    }

    /// Search between the grid's designated start and goal nodes.
    pub fn find_path_to_goal(&mut self) -> Result<Vec<NodeId>> {
        let from = self.grid.node(self.grid.start_node()?).position();
        let to = self.grid.node(self.grid.goal_node()?).position();
        self.find_path(from, to)
    }

    /// Cost of reaching `to` through `from` on the current best path to
    /// `from`. Does not modify either node.
    pub fn candidate_past_cost(&self, from: NodeId, to: NodeId) -> Cost {
        let (f, t) = (self.grid.node(from), self.grid.node(to));
        f.past_cost().saturating_add(self.costs.step_cost(f, t))
    }

    fn check_coordinate(&self, endpoint: Endpoint, position: Point) -> Result<()> {
        if self.grid.valid_coordinate(position) {
            Ok(())
        } else {
            Err(SearchError::InvalidCoordinate { endpoint, position })
        }
    }

    /// Clear whatever an earlier search left on the start node.
    fn seed(&mut self, start: NodeId, goal: NodeId) {
        let estimate = self
            .costs
            .estimate(self.grid.node(start), self.grid.node(goal));
        let node = self.grid.node_mut(start);
        node.set_previous(None);
        node.set_past_cost(0);
        node.set_future_cost(estimate);
    }

    /// Offer `current` as predecessor of its neighbor `n`.
    ///
    /// A newly discovered node gets its estimate once; an already open node
    /// only has its past cost and predecessor lowered and keeps its estimate.
    pub(crate) fn relax(&mut self, current: NodeId, n: NodeId, goal: NodeId) {
        let candidate = self.candidate_past_cost(current, n);

        if !self.is_open(n) {
            let estimate = self.costs.estimate(self.grid.node(n), self.grid.node(goal));
            let node = self.grid.node_mut(n);
            node.set_previous(Some(current));
            node.set_future_cost(estimate);
            node.set_past_cost(candidate);
            self.push_open(n);
        } else if candidate < self.grid.node(n).past_cost() {
            trace!(
                node = %self.grid.node(n).position(),
                via = %self.grid.node(current).position(),
                from = self.grid.node(n).past_cost(),
                to = candidate,
                "relaxed"
            );
            let node = self.grid.node_mut(n);
            node.set_previous(Some(current));
            node.set_past_cost(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};
    use rstest::rstest;
    use tilepath_core::Point;

    use crate::neighbors::candidate_points;
    use crate::testgrid::TestGrid;
    use crate::{
        Cost, CostModel, Endpoint, GridCosts, GridModel, Node, NodeId, SearchEngine,
        SearchError, UniformCosts,
    };

    fn engine(grid: TestGrid) -> SearchEngine<TestGrid> {
        SearchEngine::new(grid, GridCosts::default())
    }

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn assert_well_formed(engine: &SearchEngine<TestGrid>, path: &[NodeId], from: Point, to: Point) {
        let points = engine.path_points(path);
        assert_eq!(points.first(), Some(&from));
        assert_eq!(points.last(), Some(&to));

        let mut buf = Vec::new();
        for pair in points.windows(2) {
            buf.clear();
            candidate_points(pair[0], &mut buf);
            assert!(buf.contains(&pair[1]), "{} -> {} is not a step", pair[0], pair[1]);
        }
        for pair in path.windows(2) {
            let a = engine.grid().node(pair[0]);
            let b = engine.grid().node(pair[1]);
            assert!(a.past_cost() <= b.past_cost());
            assert!(b.is_walkable());
        }
    }

    #[test]
    fn open_grid_corner_to_corner() {
        let mut engine = engine(TestGrid::open(3, 3));
        let path = engine.find_path(p(0, 0), p(2, 2)).unwrap();
        assert!(path.len() >= 3);
        assert_well_formed(&engine, &path, p(0, 0), p(2, 2));
        assert_eq!(engine.path_points(&path), vec![p(0, 0), p(1, 1), p(2, 2)]);
        assert_eq!(engine.path_cost(&path), 28);
    }

    #[test]
    fn walled_in_goal_has_no_path() {
        let mut grid = TestGrid::open(3, 3);
        grid.block(1, 1);
        grid.block(1, 2);
        grid.block(2, 1);
        let mut engine = engine(grid);
        let path = engine.find_path(p(0, 0), p(2, 2)).unwrap();
        assert!(path.is_empty());
        assert_eq!(engine.open_count(), 0);
    }

    #[rstest]
    #[case::start_left(p(-1, 0), p(2, 2), Endpoint::Start)]
    #[case::start_below(p(0, 3), p(2, 2), Endpoint::Start)]
    #[case::goal_right(p(0, 0), p(3, 0), Endpoint::Goal)]
    #[case::goal_above(p(0, 0), p(1, -1), Endpoint::Goal)]
    fn invalid_coordinates_fail_untouched(
        #[case] from: Point,
        #[case] to: Point,
        #[case] endpoint: Endpoint,
    ) {
        let mut engine = engine(TestGrid::open(3, 3));
        let before = engine.grid().arena.clone();
        let position = if endpoint == Endpoint::Start { from } else { to };

        let err = engine.find_path(from, to).unwrap_err();
        assert_eq!(err, SearchError::InvalidCoordinate { endpoint, position });
        assert_eq!(engine.grid().arena, before);
    }

    #[test]
    fn start_equals_goal() {
        let mut engine = engine(TestGrid::open(3, 3));
        let path = engine.find_path(p(1, 2), p(1, 2)).unwrap();
        assert_eq!(engine.path_points(&path), vec![p(1, 2)]);
        assert_eq!(engine.path_cost(&path), 0);
    }

    #[rstest]
    #[case::around_a_bar(
        "
        S....
        .###.
        ....G
        "
    )]
    #[case::through_a_gap(
        "
        S.#..
        ..#..
        .....
        ...#G
        "
    )]
    #[case::open_field(
        "
        S.....
        ......
        ......
        ......
        ......
        .....G
        "
    )]
    #[case::away_from_origin(
        "
        .....
        ....G
        .....
        .S...
        .....
        "
    )]
    fn found_paths_are_connected_and_monotone(#[case] layout: &str) {
        let mut engine = engine(TestGrid::parse(layout));
        let from = engine.grid().node(engine.grid().start_node().unwrap()).position();
        let to = engine.grid().node(engine.grid().goal_node().unwrap()).position();

        let path = engine.find_path_to_goal().unwrap();
        assert!(!path.is_empty());
        assert_well_formed(&engine, &path, from, to);
    }

    #[test]
    fn repeated_calls_give_the_same_path() {
        let layout = "
            S....
            .###.
            ....G
        ";
        let mut engine = engine(TestGrid::parse(layout));
        let first = engine.find_path_to_goal().unwrap();
        let second = engine.find_path_to_goal().unwrap();
        assert_eq!(first, second);

        // A search from elsewhere leaves stale costs behind; they must not leak.
        engine.find_path(p(4, 0), p(0, 2)).unwrap();
        let third = engine.find_path_to_goal().unwrap();
        assert_eq!(first, third);
    }

    #[test]
    fn column_zero_is_only_entered_from_column_zero() {
        let mut engine = engine(TestGrid::open(3, 3));
        assert!(engine.find_path(p(2, 2), p(0, 2)).unwrap().is_empty());

        let path = engine.find_path(p(0, 0), p(0, 2)).unwrap();
        assert_eq!(engine.path_points(&path), vec![p(0, 0), p(0, 1), p(0, 2)]);
    }

    #[test]
    fn unwalkable_start_is_still_expanded() {
        let mut grid = TestGrid::open(3, 3);
        grid.block(0, 0);
        let mut engine = engine(grid);
        let path = engine.find_path(p(0, 0), p(2, 2)).unwrap();
        assert_eq!(engine.path_points(&path), vec![p(0, 0), p(1, 1), p(2, 2)]);
    }

    #[test]
    fn unwalkable_goal_is_never_reached() {
        let mut grid = TestGrid::open(3, 3);
        grid.block(2, 2);
        let mut engine = engine(grid);
        assert!(engine.find_path(p(0, 0), p(2, 2)).unwrap().is_empty());
    }

    #[test]
    fn designated_endpoints_must_exist() {
        let mut engine = engine(TestGrid::open(3, 3));
        assert_eq!(
            engine.find_path_to_goal(),
            Err(SearchError::Undefined("start node"))
        );
    }

    #[test]
    fn raw_coordinates() {
        let mut engine = engine(TestGrid::open(3, 3));
        let path = engine.find_path_xy(0, 0, 2, 2).unwrap();
        assert_eq!(engine.path_points(&path), vec![p(0, 0), p(1, 1), p(2, 2)]);
        assert!(matches!(
            engine.find_path_xy(-1, 0, 2, 2),
            Err(SearchError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn uniform_costs_count_steps() {
        let mut engine = SearchEngine::new(TestGrid::open(6, 6), UniformCosts);
        let path = engine.find_path(p(0, 0), p(5, 5)).unwrap();
        assert_eq!(path.len(), 6);
        assert_eq!(engine.path_cost(&path), 5);
    }

    #[test]
    fn ties_go_to_the_first_scanned_node() {
        let mut engine = engine(TestGrid::open(3, 3));
        engine.reset();
        let ids = [engine.grid().at(0, 1), engine.grid().at(1, 1), engine.grid().at(2, 1)];
        for (&id, f) in ids.iter().zip([30, 20, 20]) {
            engine.grid_mut().node_mut(id).set_past_cost(f);
            engine.grid_mut().node_mut(id).set_future_cost(0);
            engine.push_open(id);
        }

        assert_eq!(engine.pop_cheapest(), Some(ids[1]));
        assert_eq!(engine.pop_cheapest(), Some(ids[2]));
        assert_eq!(engine.pop_cheapest(), Some(ids[0]));
        assert_eq!(engine.pop_cheapest(), None);
    }

    /// Hands out a new estimate on every call.
    struct DriftingEstimate {
        next: Cell<Cost>,
    }

    impl CostModel for DriftingEstimate {
        fn step_cost(&self, _from: &Node, _to: &Node) -> Cost {
            10
        }

        fn estimate(&self, _node: &Node, _goal: &Node) -> Cost {
            let v = self.next.get();
            self.next.set(v + 1);
            v
        }
    }

    #[test]
    fn relaxation_keeps_the_first_estimate() {
        let costs = DriftingEstimate { next: Cell::new(100) };
        let mut engine = SearchEngine::new(TestGrid::open(3, 3), costs);
        engine.reset();
        let slow = engine.grid().at(0, 1);
        let fast = engine.grid().at(1, 0);
        let n = engine.grid().at(1, 1);
        let goal = engine.grid().at(2, 2);
        engine.grid_mut().node_mut(slow).set_past_cost(50);
        engine.grid_mut().node_mut(fast).set_past_cost(0);

        engine.relax(slow, n, goal);
        let node = engine.grid().node(n);
        assert_eq!(node.previous(), Some(slow));
        assert_eq!((node.past_cost(), node.future_cost()), (60, 100));

        engine.relax(fast, n, goal);
        let node = engine.grid().node(n);
        assert_eq!(node.previous(), Some(fast));
        assert_eq!((node.past_cost(), node.future_cost()), (10, 100));
        assert_eq!(node.total_cost(), 110);

        // not cheaper: nothing changes
        engine.relax(slow, n, goal);
        assert_eq!(engine.grid().node(n).previous(), Some(fast));
        assert_eq!(engine.costs().next.get(), 101);
    }

    /// Grid costs that record how often each position is estimated.
    #[derive(Default)]
    struct CountingCosts {
        inner: GridCosts,
        estimates: RefCell<HashMap<Point, usize>>,
    }

    impl CostModel for CountingCosts {
        fn step_cost(&self, from: &Node, to: &Node) -> Cost {
            self.inner.step_cost(from, to)
        }

        fn estimate(&self, node: &Node, goal: &Node) -> Cost {
            *self.estimates.borrow_mut().entry(node.position()).or_default() += 1;
            self.inner.estimate(node, goal)
        }
    }

    #[test]
    fn each_node_is_estimated_once_per_search() {
        let mut engine = SearchEngine::new(TestGrid::open(7, 7), CountingCosts::default());
        let path = engine.find_path(p(0, 0), p(6, 5)).unwrap();
        assert!(!path.is_empty());
        assert!(engine.costs().estimates.borrow().values().all(|&n| n == 1));

        for (_, node) in engine.grid().arena.iter() {
            assert_eq!(node.total_cost(), node.past_cost() + node.future_cost());
        }
    }

    /// The same step costs without an estimate: plain uniform-cost search.
    struct NoEstimate(GridCosts);

    impl CostModel for NoEstimate {
        fn step_cost(&self, from: &Node, to: &Node) -> Cost {
            self.0.step_cost(from, to)
        }

        fn estimate(&self, _node: &Node, _goal: &Node) -> Cost {
            0
        }
    }

    #[rstest]
    #[case::default_costs(GridCosts::default())]
    #[case::cheap_diagonal(GridCosts::new(10, 5))]
    #[case::dear_diagonal(GridCosts::new(10, 25))]
    #[case::small_costs(GridCosts::new(3, 5))]
    #[case::equal_costs(GridCosts::new(1, 1))]
    fn estimate_keeps_paths_minimal(#[case] costs: GridCosts) {
        let costs = costs.validated().unwrap();
        let (from, to) = (p(1, 1), p(5, 4));
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..300 {
            let mut grid = TestGrid::open(6, 6);
            for y in 0..6 {
                for x in 0..6 {
                    let q = p(x, y);
                    if q != from && q != to && rng.random_range(0..4) == 0 {
                        grid.block(x, y);
                    }
                }
            }

            let mut guided = SearchEngine::new(grid.clone(), costs);
            let mut plain = SearchEngine::new(grid, NoEstimate(costs));
            let a = guided.find_path(from, to).unwrap();
            let b = plain.find_path(from, to).unwrap();
            assert_eq!(a.is_empty(), b.is_empty());
            assert_eq!(
                guided.path_cost(&a),
                plain.path_cost(&b),
                "{:?} vs {:?}",
                guided.path_points(&a),
                plain.path_points(&b)
            );
        }
    }

    #[test]
    fn open_and_closed_sets_stay_disjoint() {
        let mut engine = engine(TestGrid::open(5, 5));
        engine.find_path(p(0, 0), p(4, 4)).unwrap();
        for (id, _) in engine.grid().arena.iter() {
            assert!(!(engine.is_open(id) && engine.is_closed(id)));
        }
        let start = engine.grid().at(0, 0);
        for (id, node) in engine.grid().arena.iter() {
            if id != start && (engine.is_open(id) || engine.is_closed(id)) {
                let prev = node.previous().unwrap();
                assert!(engine.is_closed(prev));
            }
        }
    }

    #[test]
    fn runs_under_a_tracing_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let mut engine = engine(TestGrid::open(4, 4));
            let path = engine.find_path(p(0, 0), p(3, 3)).unwrap();
            assert_eq!(path.len(), 4);
        });
    }
}

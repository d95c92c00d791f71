//! A* shortest-path search over bounded node grids.
//!
//! The crate is built around three pieces:
//!
//! - [`GridModel`]: a bounded grid that owns one [`Node`] per cell and
//!   answers coordinate validity, lookup by position and the designated
//!   start/goal nodes. [`NodeArena`] provides the storage half for any grid.
//! - [`CostModel`]: the pluggable step-cost and heuristic rules.
//!   [`GridCosts`] (straight/diagonal costs, octile heuristic) and
//!   [`UniformCosts`] are provided.
//! - [`SearchEngine`]: runs the search ([`SearchEngine::find_path`],
//!   [`SearchEngine::find_path_to_goal`]) and owns the open/closed
//!   bookkeeping, rebuilt on every call.
//!
//! Nodes are addressed by [`NodeId`] handles and back-pointers are stored as
//! handles, so a node graph is plain data the engine rewrites in place.
//!
//! # Outcomes
//!
//! | Situation | Result |
//! |---|---|
//! | path found | `Ok(nodes)`, start first, goal last |
//! | goal unreachable | `Ok(vec![])` |
//! | coordinate rejected by the grid | `Err(SearchError::InvalidCoordinate)` |
//! | grid cannot supply a node | `Err(SearchError::Undefined)` |
//!
//! Each search runs inside a `find_path` [`tracing`] span; the crate never
//! installs a subscriber.

mod astar;
mod costs;
mod engine;
mod error;
mod neighbors;
mod node;
mod path;
mod traits;

#[cfg(test)]
mod testgrid;

pub use costs::{DIAGONAL_COST, GridCosts, STRAIGHT_COST, UniformCosts};
pub use engine::SearchEngine;
pub use error::{Endpoint, Result, SearchError};
pub use neighbors::candidate_points;
pub use node::{Cost, Node, NodeArena, NodeId};
pub use traits::{CostModel, GridModel};

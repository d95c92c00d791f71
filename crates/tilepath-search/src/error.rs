//! Error types for path searches.

use std::fmt;

use thiserror::Error;
use tilepath_core::Point;

use crate::node::Cost;

/// Which end of a requested path an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Failures of a path search.
///
/// An exhausted search is not an error: it is reported as an empty path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A requested coordinate was rejected by the grid's validity check.
    #[error("invalid {endpoint} coordinate {position}")]
    InvalidCoordinate { endpoint: Endpoint, position: Point },

    /// A collaborator could not provide something the search needs,
    /// such as a designated start node.
    #[error("undefined {0}")]
    Undefined(&'static str),

    /// The back-pointer chain from the goal did not lead back to the start.
    #[error("back-pointers from {goal} do not reach {start} within {steps} steps")]
    BrokenPath {
        start: Point,
        goal: Point,
        steps: usize,
    },

    /// Step costs must be strictly positive.
    #[error("invalid step costs: straight {straight}, diagonal {diagonal}")]
    InvalidCost { straight: Cost, diagonal: Cost },
}

pub type Result<T> = std::result::Result<T, SearchError>;

use tilepath_core::{chebyshev, octile};

use crate::error::{Result, SearchError};
use crate::node::{Cost, Node};
use crate::traits::CostModel;

/// Default cost of a horizontal or vertical step.
pub const STRAIGHT_COST: Cost = 10;
/// Default cost of a diagonal step.
pub const DIAGONAL_COST: Cost = 14;

/// Step costs for grids that allow straight and diagonal moves.
///
/// The heuristic is the [`octile`] bound to the goal. It never exceeds the
/// cost of the cheapest unobstructed route, whichever of the two step costs is
/// larger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GridCosts {
    pub straight: Cost,
    pub diagonal: Cost,
}

impl Default for GridCosts {
    fn default() -> Self {
        Self {
            straight: STRAIGHT_COST,
            diagonal: DIAGONAL_COST,
        }
    }
}

impl GridCosts {
    pub const fn new(straight: Cost, diagonal: Cost) -> Self {
        Self { straight, diagonal }
    }

    /// Reject non-positive step costs.
    pub fn validated(self) -> Result<Self> {
        if self.straight <= 0 || self.diagonal <= 0 {
            return Err(SearchError::InvalidCost {
                straight: self.straight,
                diagonal: self.diagonal,
            });
        }
        Ok(self)
    }
}

impl CostModel for GridCosts {
    fn step_cost(&self, from: &Node, to: &Node) -> Cost {
        if from.position().is_diagonal_to(to.position()) {
            self.diagonal
        } else {
            self.straight
        }
    }

    fn estimate(&self, node: &Node, goal: &Node) -> Cost {
        octile(node.position(), goal.position(), self.straight, self.diagonal)
    }
}

/// Every step costs 1; the heuristic is the Chebyshev distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UniformCosts;

impl CostModel for UniformCosts {
    fn step_cost(&self, _from: &Node, _to: &Node) -> Cost {
        1
    }

    fn estimate(&self, node: &Node, goal: &Node) -> Cost {
        chebyshev(node.position(), goal.position())
    }
}

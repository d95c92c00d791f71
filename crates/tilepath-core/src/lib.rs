//! **tilepath-core**: geometry primitives shared by the *tilepath* crates.
//!
//! Provides the integer [`Point`], the half-open [`Bounds`] rectangle that
//! every grid is laid out on, and the grid distance metrics used as search heuristics.

pub mod distance;
pub mod geom;

pub use distance::{chebyshev, octile};
pub use geom::{Bounds, BoundsIter, Point};

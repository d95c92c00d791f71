use thiserror::Error;
use tilepath_core::Point;

/// Errors raised while building or editing a [`TerrainMap`](crate::TerrainMap).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TerrainError {
    #[error("terrain layout is empty")]
    Empty,

    /// Lines have different widths. `line` is 1-based.
    #[error("line {line} is {found} cells wide, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile {ch:?} at {pos}")]
    UnknownTile { ch: char, pos: Point },

    #[error("marker {marker:?} at {second} repeats the one at {first}")]
    DuplicateMarker {
        marker: char,
        first: Point,
        second: Point,
    },

    #[error("{0} is outside the map")]
    OutOfBounds(Point),
}

//! Terrain maps for *tilepath* searches.
//!
//! A [`TerrainMap`] is a [`GridModel`](tilepath_search::GridModel) parsed
//! from an ASCII layout:
//!
//! ```text
//! S..#....
//! .#.#.##.
//! .#...#.G
//! ```
//!
//! `.` is floor, `#` is wall, `S` and `G` mark the designated start and goal.

mod error;
mod map;
mod tile;

pub use error::TerrainError;
pub use map::TerrainMap;
pub use tile::Tile;

use std::str::FromStr;

use tilepath_core::{Bounds, Point};
use tilepath_search::{GridModel, Node, NodeArena, NodeId, SearchError};
use tracing::debug;

use crate::error::TerrainError;
use crate::tile::Tile;

/// Character drawn on path cells by [`TerrainMap::render_path`].
pub const PATH_CHAR: char = '*';

/// A rectangular terrain of floor and wall cells with an optional designated
/// start and goal.
#[derive(Debug, Clone)]
pub struct TerrainMap {
    arena: NodeArena,
    start: Option<NodeId>,
    goal: Option<NodeId>,
}

impl TerrainMap {
    /// An all-floor map without designated endpoints.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            arena: NodeArena::new(Bounds::with_size(width, height)),
            start: None,
            goal: None,
        }
    }

    /// Build a map from an ASCII layout.
    ///
    /// Blank lines before and after the layout are ignored, as is a trailing
    /// `\r` on each line. All remaining lines must have the same width, and
    /// `S` and `G` may each appear at most once.
    pub fn parse(layout: &str) -> Result<Self, TerrainError> {
        let lines: Vec<&str> = layout.lines().map(|l| l.trim_end_matches('\r')).collect();
        let first = lines.iter().position(|l| !l.trim().is_empty());
        let last = lines.iter().rposition(|l| !l.trim().is_empty());
        let (Some(first), Some(last)) = (first, last) else {
            return Err(TerrainError::Empty);
        };
        let rows = &lines[first..=last];

        let width = rows[0].chars().count();
        for (i, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(TerrainError::InconsistentWidth {
                    line: first + i + 1,
                    expected: width,
                    found,
                });
            }
        }

        let mut map = Self::new(width as i32, rows.len() as i32);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let tile = Tile::from_char(ch).ok_or(TerrainError::UnknownTile { ch, pos })?;
                map.place(pos, tile)?;
            }
        }

        debug!(
            width = map.width(),
            height = map.height(),
            start = ?map.start.map(|id| map.arena.point(id)),
            goal = ?map.goal.map(|id| map.arena.point(id)),
            "parsed terrain"
        );
        Ok(map)
    }

    fn place(&mut self, pos: Point, tile: Tile) -> Result<(), TerrainError> {
        let id = self.id(pos)?;
        let marker = match tile {
            Tile::Start => Some(&mut self.start),
            Tile::Goal => Some(&mut self.goal),
            Tile::Floor | Tile::Wall => None,
        };
        if let Some(slot) = marker {
            if let Some(prev) = *slot {
                return Err(TerrainError::DuplicateMarker {
                    marker: tile.as_char(),
                    first: self.arena.point(prev),
                    second: pos,
                });
            }
            *slot = Some(id);
        }
        self.arena.node_mut(id).set_walkable(tile.is_walkable());
        Ok(())
    }

    fn id(&self, p: Point) -> Result<NodeId, TerrainError> {
        self.arena.id(p).ok_or(TerrainError::OutOfBounds(p))
    }

    pub fn width(&self) -> i32 {
        self.arena.bounds().width()
    }

    pub fn height(&self) -> i32 {
        self.arena.bounds().height()
    }

    /// Tile at `p` as it would be written in a layout.
    pub fn tile(&self, p: Point) -> Option<Tile> {
        let id = self.arena.id(p)?;
        let tile = if Some(id) == self.start {
            Tile::Start
        } else if Some(id) == self.goal {
            Tile::Goal
        } else if self.arena.node(id).is_walkable() {
            Tile::Floor
        } else {
            Tile::Wall
        };
        Some(tile)
    }

    pub fn set_walkable(&mut self, p: Point, walkable: bool) -> Result<(), TerrainError> {
        let id = self.id(p)?;
        self.arena.node_mut(id).set_walkable(walkable);
        Ok(())
    }

    /// Designate `p` as the start. The cell keeps its walkability.
    pub fn set_start(&mut self, p: Point) -> Result<(), TerrainError> {
        self.start = Some(self.id(p)?);
        Ok(())
    }

    /// Designate `p` as the goal. The cell keeps its walkability.
    pub fn set_goal(&mut self, p: Point) -> Result<(), TerrainError> {
        self.goal = Some(self.id(p)?);
        Ok(())
    }

    /// The layout with the cells of `path` drawn as [`PATH_CHAR`].
    pub fn render_path(&self, path: &[NodeId]) -> String {
        self.render_path_with(path, PATH_CHAR)
    }

    /// The layout with the floor cells of `path` drawn as `mark`. Designated
    /// start and goal cells keep their markers and walls stay walls.
    pub fn render_path_with(&self, path: &[NodeId], mark: char) -> String {
        let bounds = self.arena.bounds();
        let mut on_path = vec![false; self.arena.len()];
        for id in path {
            if let Some(cell) = on_path.get_mut(id.index()) {
                *cell = true;
            }
        }

        let mut out = String::with_capacity(self.arena.len() + bounds.height() as usize);
        for p in bounds {
            let Some(tile) = self.tile(p) else {
                continue;
            };
            let ch = match (tile, self.arena.id(p)) {
                (Tile::Floor, Some(id)) if on_path[id.index()] => mark,
                _ => tile.as_char(),
            };
            out.push(ch);
            if p.x == bounds.max.x - 1 {
                out.push('\n');
            }
        }
        out
    }
}

impl FromStr for TerrainMap {
    type Err = TerrainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl GridModel for TerrainMap {
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

    fn start_node(&self) -> Result<NodeId, SearchError> {
        self.start.ok_or(SearchError::Undefined("start node"))
    }

    fn goal_node(&self) -> Result<NodeId, SearchError> {
        self.goal.ok_or(SearchError::Undefined("goal node"))
    }
}

/// A terrain cell as written in a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Floor,
    Wall,
    Start,
    Goal,
}

impl Tile {
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Floor),
            '#' => Some(Self::Wall),
            'S' => Some(Self::Start),
            'G' => Some(Self::Goal),
            _ => None,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::Floor => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::Goal => 'G',
        }
    }

    /// Start and goal cells stand on floor.
    pub const fn is_walkable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

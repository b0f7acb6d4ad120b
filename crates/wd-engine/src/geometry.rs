//! Grid positions and movement directions.

use serde::{Deserialize, Serialize};

/// A cell coordinate. `x` grows east, `y` grows south.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Position {
    /// Create a position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring position one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Squared Euclidean distance to another position.
    pub fn distance_squared(self, other: Position) -> i32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four orthogonal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Up, `(0, -1)`.
    North,
    /// Down, `(0, 1)`.
    South,
    /// Right, `(1, 0)`.
    East,
    /// Left, `(-1, 0)`.
    West,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// The `(dx, dy)` displacement of this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }

    /// Parse a direction from a word or a WASD key (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "w" | "n" | "north" | "up" => Some(Self::North),
            "s" | "south" | "down" => Some(Self::South),
            "d" | "e" | "east" | "right" => Some(Self::East),
            "a" | "west" | "left" => Some(Self::West),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::North => write!(f, "north"),
            Self::South => write!(f, "south"),
            Self::East => write!(f, "east"),
            Self::West => write!(f, "west"),
        }
    }
}

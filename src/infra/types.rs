use std::fmt;

use serde::{Deserialize, Serialize};

/// A board cell. `x` is the row and grows southwards, `y` is the column and
/// grows eastwards, matching the coordinates the game server sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn neighbors(&self) -> [Position; 4] {
        [
            Position::new(self.x - 1, self.y), // North
            Position::new(self.x, self.y + 1), // East
            Position::new(self.x + 1, self.y), // South
            Position::new(self.x, self.y - 1), // West
        ]
    }

    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.distance(other) == 1
    }

    pub fn step(&self, mv: Move) -> Position {
        match mv {
            Move::Stay => *self,
            Move::North => Position::new(self.x - 1, self.y),
            Move::South => Position::new(self.x + 1, self.y),
            Move::East => Position::new(self.x, self.y + 1),
            Move::West => Position::new(self.x, self.y - 1),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The five orders the server accepts each turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Stay,
    North,
    South,
    East,
    West,
}

impl Move {
    pub const DIRECTIONS: [Move; 4] = [Move::North, Move::East, Move::South, Move::West];

    /// Name used on the wire.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Move::Stay => "Stay",
            Move::North => "North",
            Move::South => "South",
            Move::East => "East",
            Move::West => "West",
        }
    }

    /// The single step that leads from `from` to `to`, if they are orthogonal neighbours.
    pub fn between(from: Position, to: Position) -> Option<Move> {
        match (to.x - from.x, to.y - from.y) {
            (-1, 0) => Some(Move::North),
            (1, 0) => Some(Move::South),
            (0, 1) => Some(Move::East),
            (0, -1) => Some(Move::West),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str_name())
    }
}

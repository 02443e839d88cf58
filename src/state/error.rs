use thiserror::Error;

use crate::infra::Position;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("board of size {size} needs {expected} tile characters, got {actual}")]
    TileCount {
        size: usize,
        expected: usize,
        actual: usize,
    },

    #[error("board size {0} is too large")]
    BoardTooLarge(usize),

    #[error("unknown tile {token:?} at {position}")]
    UnknownTile { token: String, position: Position },

    #[error("mine at {position} is owned by unknown hero {owner}")]
    UnknownMineOwner { owner: u32, position: Position },

    #[error("hero {id} stands on {position}, which is not a walkable tile")]
    HeroNotOnBoard { id: u32, position: Position },

    #[error("heroes {first} and {second} both stand on {position}")]
    SharedPosition {
        first: u32,
        second: u32,
        position: Position,
    },

    #[error("controlled hero {0} is not part of the game")]
    MissingControlledHero(u32),

    #[error("malformed game state: {0}")]
    Json(#[from] serde_json::Error),
}

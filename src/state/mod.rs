mod board;
pub mod dto;
mod error;
mod hero;
mod snapshot;

#[cfg(test)]
pub(crate) mod fixtures;

pub use board::{BoardGraph, Tile, TileId, UNREACHABLE};
pub use error::SnapshotError;
pub use hero::{Hero, Mine, Pub};
pub use snapshot::{Landmark, Landmarks, Snapshot};

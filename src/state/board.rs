use std::collections::{HashMap, VecDeque};

use crate::infra::Position;

/// Index of a tile inside its [`BoardGraph`].
pub type TileId = usize;

/// Distance of a tile the last search did not reach.
pub const UNREACHABLE: u32 = u32::MAX;

/// A walkable cell together with the search state of the current turn.
#[derive(Clone, Debug)]
pub struct Tile {
    pub position: Position,
    neighbors: Vec<TileId>,
    /// Cheapest known cost from the search source.
    pub distance: u32,
    /// Cost of entering this tile.
    pub cost: u32,
    pub predecessor: Option<TileId>,
}

impl Tile {
    fn new(position: Position) -> Self {
        Self {
            position,
            neighbors: Vec::with_capacity(4),
            distance: UNREACHABLE,
            cost: 1,
            predecessor: None,
        }
    }

    pub fn neighbors(&self) -> &[TileId] {
        &self.neighbors
    }

    pub fn is_reachable(&self) -> bool {
        self.distance != UNREACHABLE
    }
}

/// Adjacency over the walkable cells of a board. Walls are never stored.
///
/// Tiles live in a flat arena and refer to each other by [`TileId`], so the
/// cyclic neighbour relation needs no shared ownership.
#[derive(Clone, Debug)]
pub struct BoardGraph {
    pub size: i32,
    index: HashMap<Position, TileId>,
    tiles: Vec<Tile>,
}

impl BoardGraph {
    /// Build the graph from the walkable cells of a `size` x `size` board.
    pub fn new(size: i32, walkable: impl IntoIterator<Item = Position>) -> Self {
        let mut tiles = Vec::new();
        let mut index = HashMap::new();
        for pos in walkable {
            if index.contains_key(&pos) {
                continue;
            }
            index.insert(pos, tiles.len());
            tiles.push(Tile::new(pos));
        }

        for id in 0..tiles.len() {
            let pos = tiles[id].position;
            let neighbors: Vec<TileId> = pos
                .neighbors()
                .iter()
                .filter_map(|n| index.get(n).copied())
                .collect();
            tiles[id].neighbors = neighbors;
        }

        Self { size, index, tiles }
    }

    pub fn tile_id(&self, pos: &Position) -> Option<TileId> {
        self.index.get(pos).copied()
    }

    /// `None` for walls and cells off the board.
    pub fn tile_at(&self, pos: &Position) -> Option<&Tile> {
        self.tile_id(pos).map(|id| &self.tiles[id])
    }

    pub fn tile(&self, id: TileId) -> &Tile {
        &self.tiles[id]
    }

    pub fn tile_mut(&mut self, id: TileId) -> &mut Tile {
        &mut self.tiles[id]
    }

    pub fn all_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn tile_ids(&self) -> std::ops::Range<TileId> {
        0..self.tiles.len()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Forget costs and search results from a previous turn.
    pub fn reset(&mut self) {
        for tile in &mut self.tiles {
            tile.cost = 1;
            tile.distance = UNREACHABLE;
            tile.predecessor = None;
        }
    }

    /// Forget search results but keep the costs.
    pub fn reset_search(&mut self) {
        for tile in &mut self.tiles {
            tile.distance = UNREACHABLE;
            tile.predecessor = None;
        }
    }

    /// Level-order walk from `start` up to `radius` hops. Returns every tile
    /// reached together with the depth it was first reached at, `start`
    /// included at depth 0. Tiles for which `expand` is false are reported
    /// but not walked through.
    pub fn within_hops<F>(&self, start: TileId, radius: u32, expand: F) -> Vec<(TileId, u32)>
    where
        F: Fn(TileId) -> bool,
    {
        let mut seen = vec![false; self.tiles.len()];
        let mut reached = vec![(start, 0)];
        let mut queue = VecDeque::from([start]);
        seen[start] = true;

        let mut depth = 0;
        while !queue.is_empty() && depth < radius {
            depth += 1;
            let level_len = queue.len();
            for _ in 0..level_len {
                let Some(current) = queue.pop_front() else {
                    break;
                };
                if current != start && !expand(current) {
                    continue;
                }
                for &next in &self.tiles[current].neighbors {
                    if seen[next] {
                        continue;
                    }
                    seen[next] = true;
                    reached.push((next, depth));
                    queue.push_back(next);
                }
            }
        }

        reached
    }

    /// Number of predecessor links between `id` and the search source, or
    /// `None` if the tile was not reached.
    pub fn hops_to(&self, id: TileId) -> Option<u32> {
        if !self.tiles[id].is_reachable() {
            return None;
        }
        let mut hops = 0;
        let mut current = id;
        while let Some(prev) = self.tiles[current].predecessor {
            hops += 1;
            current = prev;
            if hops as usize > self.tiles.len() {
                return None;
            }
        }
        Some(hops)
    }
}

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::state::{Landmark, Snapshot, TileId};

#[derive(Clone, Copy, Eq, PartialEq)]
struct Node {
    tile: TileId,
    distance: u32,
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.tile.cmp(&self.tile))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Mines and pubs in the order the search settled them, cheapest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Discoveries {
    pub mines: Vec<TileId>,
    pub pubs: Vec<TileId>,
}

pub struct Dijkstra;

impl Dijkstra {
    /// Single-source shortest paths over the board, entering a tile costs
    /// that tile's `cost`. Leaves `distance` and `predecessor` on every tile.
    ///
    /// Mines and pubs are settled but not expanded: heroes bump into them,
    /// they never walk across.
    #[tracing::instrument(level = "debug", skip(snapshot), fields(tiles = snapshot.board().len()))]
    pub fn run(snapshot: &mut Snapshot, source: TileId) -> Discoveries {
        let (board, landmarks) = snapshot.board_and_landmarks();
        board.reset_search();

        let mut discoveries = Discoveries::default();
        let mut settled = vec![false; board.len()];
        let mut open_set = BinaryHeap::new();

        board.tile_mut(source).distance = 0;
        open_set.push(Node {
            tile: source,
            distance: 0,
        });

        while let Some(Node { tile: current, distance }) = open_set.pop() {
            if settled[current] {
                continue;
            }
            settled[current] = true;

            match landmarks.at(&board.tile(current).position) {
                Some(Landmark::Mine) => discoveries.mines.push(current),
                Some(Landmark::Pub) => discoveries.pubs.push(current),
                None => {}
            }
            if current != source && landmarks.at(&board.tile(current).position).is_some() {
                continue;
            }

            let neighbors = board.tile(current).neighbors().to_vec();
            for next in neighbors {
                if settled[next] {
                    continue;
                }
                let tile = board.tile_mut(next);
                let candidate = distance.saturating_add(tile.cost);
                if candidate < tile.distance {
                    tile.distance = candidate;
                    tile.predecessor = Some(current);
                    open_set.push(Node {
                        tile: next,
                        distance: candidate,
                    });
                }
            }
        }

        debug!(
            "settled {} tiles, {} mines, {} pubs",
            settled.iter().filter(|s| **s).count(),
            discoveries.mines.len(),
            discoveries.pubs.len()
        );
        discoveries
    }
}

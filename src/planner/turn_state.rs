use std::collections::HashSet;

use crate::infra::{Discoveries, Move, PathError, Position, move_towards};
use crate::planner::Policy;
use crate::state::{Hero, Snapshot, TileId};

/// One turn's snapshot after costing and searching, plus the queries the
/// decision makers share.
pub struct TurnState<'a> {
    pub snapshot: &'a Snapshot,
    pub policy: &'a Policy,
    current: TileId,
    discoveries: Discoveries,
}

impl<'a> TurnState<'a> {
    /// `snapshot` must already carry the search rooted at the controlled hero.
    pub fn new(snapshot: &'a Snapshot, policy: &'a Policy, discoveries: Discoveries) -> Self {
        Self {
            snapshot,
            policy,
            current: snapshot.current_tile(),
            discoveries,
        }
    }

    pub fn me(&self) -> &'a Hero {
        self.snapshot.me()
    }

    pub fn current_tile(&self) -> TileId {
        self.current
    }

    pub fn current_position(&self) -> Position {
        self.me().position
    }

    /// Reachable mines, cheapest first.
    pub fn discovered_mines(&self) -> &[TileId] {
        &self.discoveries.mines
    }

    /// Reachable pubs, cheapest first.
    pub fn discovered_pubs(&self) -> &[TileId] {
        &self.discoveries.pubs
    }

    pub fn position_of(&self, tile: TileId) -> Position {
        self.snapshot.board().tile(tile).position
    }

    pub fn moves_to_reach(&self, tile: TileId) -> Option<u32> {
        self.snapshot.board().hops_to(tile)
    }

    pub fn is_my_mine(&self, pos: &Position) -> bool {
        self.snapshot
            .mine_at(pos)
            .is_some_and(|mine| mine.owner == Some(self.me().id))
    }

    pub fn closest_pub(&self) -> Option<TileId> {
        self.discoveries.pubs.first().copied()
    }

    /// Cheapest reachable mine we do not own yet.
    pub fn closest_capturable_mine(&self) -> Option<TileId> {
        self.discoveries
            .mines
            .iter()
            .copied()
            .find(|&m| !self.is_my_mine(&self.position_of(m)))
    }

    /// Capturable mine right next to us, if any.
    pub fn adjacent_capturable_mine(&self) -> Option<TileId> {
        let here = self.current_position();
        self.discoveries.mines.iter().copied().find(|&m| {
            let pos = self.position_of(m);
            pos.is_adjacent(&here) && !self.is_my_mine(&pos)
        })
    }

    /// Reachable enemy the fewest moves away. Ties go to the lower id.
    pub fn closest_enemy(&self) -> Option<&'a Hero> {
        let board = self.snapshot.board();
        self.snapshot
            .enemies()
            .filter_map(|enemy| {
                let tile = board.tile_id(&enemy.position)?;
                let moves = board.hops_to(tile)?;
                Some((moves, enemy))
            })
            .min_by_key(|(moves, _)| *moves)
            .map(|(_, enemy)| enemy)
    }

    /// Whether any pub is right next to `pos`.
    pub fn stands_adjacent_to_pub(&self, pos: &Position) -> bool {
        self.snapshot.pubs().any(|p| p.position.is_adjacent(pos))
    }

    /// Whether the cheapest pub is right next to us.
    pub fn next_to_closest_pub(&self) -> bool {
        self.closest_pub()
            .is_some_and(|p| self.position_of(p).is_adjacent(&self.current_position()))
    }

    /// Tiles `hero` can strike next turn: its own and everything within the
    /// threatened radius.
    pub fn threatened_tiles(&self, hero: &Hero) -> HashSet<TileId> {
        let board = self.snapshot.board();
        let Some(start) = board.tile_id(&hero.position) else {
            return HashSet::new();
        };
        board
            .within_hops(start, self.policy.threatened_radius, |id| {
                self.snapshot
                    .landmark_at(&board.tile(id).position)
                    .is_none()
            })
            .into_iter()
            .map(|(id, _)| id)
            .collect()
    }

    pub fn move_towards(&self, goal: Option<TileId>) -> Result<Move, PathError> {
        move_towards(self.snapshot.board(), self.current, goal)
    }
}

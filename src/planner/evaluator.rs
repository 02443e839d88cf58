use std::collections::HashSet;

use tracing::trace;

use crate::planner::TurnState;
use crate::state::{Hero, TileId};

/// Score of a tile that must never be chosen.
pub const INVALID_TILE: i32 = -999;

/// Scores the tiles we could stand on next turn by the damage we expect to
/// deal and take there.
pub struct CombatEvaluator<'s, 'a> {
    state: &'s TurnState<'a>,
    target: &'a Hero,
    threatened: Vec<HashSet<TileId>>,
}

impl<'s, 'a> CombatEvaluator<'s, 'a> {
    /// `target` is the enemy we are closing in on.
    pub fn new(state: &'s TurnState<'a>, target: &'a Hero) -> Self {
        let threatened = state
            .snapshot
            .enemies()
            .map(|enemy| state.threatened_tiles(enemy))
            .collect();
        Self {
            state,
            target,
            threatened,
        }
    }

    /// Only enemy neighbours earn the damage-dealt bonus. Every step candidate
    /// borders the tile we stand on, and we never hit ourselves.
    pub fn score(&self, tile: TileId) -> i32 {
        let policy = self.state.policy;
        let snapshot = self.state.snapshot;
        let board = snapshot.board();
        let pos = board.tile(tile).position;

        if snapshot.enemy_at(&pos).is_some() {
            return INVALID_TILE;
        }

        let mut value = 0;
        for &adj in board.tile(tile).neighbors() {
            if snapshot.enemy_at(&board.tile(adj).position).is_some() {
                value += policy.dealt_damage_value;
            }
        }

        for threatened in &self.threatened {
            if threatened.contains(&tile) {
                value -= policy.received_damage_value;
            }
        }

        let target = self.target.position;
        if pos.distance(&target) < self.state.current_position().distance(&target) {
            value += policy.closing_bonus;
        }

        trace!("tile {} scores {}", pos, value);
        value
    }

    /// Best of the current tile and its neighbours. The current tile wins ties.
    pub fn best_tile(&self) -> TileId {
        let current = self.state.current_tile();
        let mut best = current;
        let mut best_value = self.score(current);

        for &adj in self.state.snapshot.board().tile(current).neighbors() {
            let value = self.score(adj);
            if value > best_value {
                best = adj;
                best_value = value;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{Dijkstra, Position, apply_threat_costs};
    use crate::planner::Policy;
    use crate::state::{Snapshot, fixtures};

    fn prepared(rows: &[&str]) -> Snapshot {
        let mut snapshot = fixtures::snapshot(rows, |h| h);
        apply_threat_costs(&mut snapshot, &Policy::default().threat);
        snapshot
    }

    fn tile(snapshot: &Snapshot, x: i32, y: i32) -> TileId {
        snapshot.board().tile_id(&Position::new(x, y)).unwrap()
    }

    #[test]
    fn test_occupied_tile_is_invalid() {
        let mut snapshot = prepared(&["      ", "  @1@2", "      "]);
        let policy = Policy::default();
        let source = snapshot.current_tile();
        let found = Dijkstra::run(&mut snapshot, source);
        let state = TurnState::new(&snapshot, &policy, found);
        let enemy = snapshot.hero(2).unwrap();
        let evaluator = CombatEvaluator::new(&state, enemy);

        assert_eq!(evaluator.score(tile(&snapshot, 1, 2)), INVALID_TILE);
    }

    #[test]
    fn test_adjacent_enemy_scores_attack_minus_threat() {
        let mut snapshot = prepared(&["      ", "  @1@2", "      "]);
        let policy = Policy::default();
        let source = snapshot.current_tile();
        let found = Dijkstra::run(&mut snapshot, source);
        let state = TurnState::new(&snapshot, &policy, found);
        let enemy = snapshot.hero(2).unwrap();
        let evaluator = CombatEvaluator::new(&state, enemy);

        // standing still: one attack, inside the enemy's reach
        assert_eq!(evaluator.score(source), 21 - 20);
        // stepping away north: no attack, still in reach
        assert_eq!(evaluator.score(tile(&snapshot, 0, 1)), -20);
        assert_eq!(evaluator.best_tile(), source);
    }

    #[test]
    fn test_closing_bonus_breaks_ties() {
        let mut snapshot = prepared(&[
            "@1              ",
            "                ",
            "                ",
            "                ",
            "                ",
            "                ",
            "                ",
            "            @2  ",
        ]);
        let policy = Policy::default();
        let source = snapshot.current_tile();
        let found = Dijkstra::run(&mut snapshot, source);
        let state = TurnState::new(&snapshot, &policy, found);
        let enemy = snapshot.hero(2).unwrap();
        let evaluator = CombatEvaluator::new(&state, enemy);

        assert_eq!(evaluator.score(source), 0);
        assert_eq!(evaluator.score(tile(&snapshot, 0, 1)), 1);
        assert_eq!(evaluator.score(tile(&snapshot, 1, 0)), 1);
        assert_ne!(evaluator.best_tile(), source);
    }
}

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::infra::{GameObserver, Move};
use crate::planner::TurnState;
use crate::state::Snapshot;

/// Observer that writes everything to the tracing log.
pub struct DefaultObserver;

impl GameObserver for DefaultObserver {
    fn on_game_start(&mut self, snapshot: &Snapshot) {
        info!("Game {} started", snapshot.game_id);
        info!("- board size: {}x{}", snapshot.board().size, snapshot.board().size);
        info!("- playing as hero {} ({})", snapshot.me().id, snapshot.me().name);
        for hero in snapshot.heroes() {
            info!("- hero {} ({}) spawns at {}", hero.id, hero.name, hero.spawn);
        }
        info!("- {} mines, {} pubs", snapshot.mines().count(), snapshot.pubs().count());
    }

    fn on_turn_start(&mut self, snapshot: &Snapshot) {
        let me = snapshot.me();
        info!(
            "turn: {}, pos: {}, life: {}, gold: {}, mines: {}",
            snapshot.turn, me.position, me.life, me.gold, me.mine_count
        );
    }

    fn on_paths_computed(&mut self, state: &TurnState<'_>) {
        let board = state.snapshot.board();
        let mines: Vec<String> = state
            .discovered_mines()
            .iter()
            .map(|&m| format!("{}@{}", board.tile(m).position, board.tile(m).distance))
            .collect();
        let pubs: Vec<String> = state
            .discovered_pubs()
            .iter()
            .map(|&p| format!("{}@{}", board.tile(p).position, board.tile(p).distance))
            .collect();
        debug!("mines by distance: [{}]", mines.join(", "));
        debug!("pubs by distance: [{}]", pubs.join(", "));
    }

    fn on_maker_considered(&mut self, name: &str) {
        debug!("{} thinks...", name);
    }

    fn on_maker_selected(&mut self, name: &str, mv: Move, _state: &TurnState<'_>) {
        info!("{} takes the turn: {}", name, mv);
    }

    fn on_deadline_exceeded(&mut self, elapsed: Duration) {
        warn!(
            "turn budget exhausted after {:.2}ms, staying",
            elapsed.as_secs_f64() * 1000.0
        );
    }

    fn on_turn_finished(&mut self, turn: u32, mv: Move, elapsed: Duration) {
        debug!(
            "turn {} decided in {:.3}ms: {}",
            turn,
            elapsed.as_secs_f64() * 1000.0,
            mv
        );
    }

    fn on_game_finished(&mut self, game_id: &str, turns_played: u32) {
        info!("Game {} finished after {} turns", game_id, turns_played);
    }
}

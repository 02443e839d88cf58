use std::time::Duration;

use crate::infra::Move;
use crate::planner::TurnState;
use crate::state::Snapshot;

/// Trait for observing the bot while it plays. Purely informational: nothing
/// an observer does feeds back into the decision.
pub trait GameObserver {
    /// Called when the first snapshot of a game arrives
    fn on_game_start(&mut self, snapshot: &Snapshot);

    /// Called before any search runs for a turn
    fn on_turn_start(&mut self, snapshot: &Snapshot);

    /// Called once costs and shortest paths are known
    fn on_paths_computed(&mut self, state: &TurnState<'_>) {
        let _ = state;
    }

    /// Called for each decision maker asked whether it wants the turn
    fn on_maker_considered(&mut self, name: &str) {
        let _ = name;
    }

    /// Called when a decision maker claimed the turn
    fn on_maker_selected(&mut self, name: &str, mv: Move, state: &TurnState<'_>);

    /// Called when the turn budget ran out before a decision was made
    fn on_deadline_exceeded(&mut self, elapsed: Duration);

    /// Called with the move sent to the server
    fn on_turn_finished(&mut self, turn: u32, mv: Move, elapsed: Duration);

    /// Called when the server reports the game as finished or input ends
    fn on_game_finished(&mut self, game_id: &str, turns_played: u32);
}

use tracing::debug;

use crate::infra::Move;
use crate::planner::strategies::DecisionMaker;
use crate::planner::{DecisionError, TurnState};

/// Last link of the chain: go take the closest mine that is not ours.
pub struct LootingDecisionMaker;

impl DecisionMaker for LootingDecisionMaker {
    fn name(&self) -> &'static str {
        "Looting"
    }

    fn wants_to_act(&mut self, _state: &TurnState<'_>) -> bool {
        true
    }

    #[tracing::instrument(level = "debug", skip_all, fields(maker = "Looting"))]
    fn take_action(&mut self, state: &TurnState<'_>) -> Result<Move, DecisionError> {
        let Some(mine) = state.closest_capturable_mine() else {
            debug!("no mine left to take, heading to a pub");
            return Ok(state.move_towards(state.closest_pub())?);
        };

        let life = state.me().life;
        let moves = state.moves_to_reach(mine).unwrap_or(0);
        if life.saturating_sub(moves) < state.policy.heal_life {
            debug!(
                "mine at {} is {} moves away, too far with {} life",
                state.position_of(mine),
                moves,
                life
            );
            return Ok(state.move_towards(state.closest_pub())?);
        }

        debug!("heading towards mine at {}", state.position_of(mine));
        Ok(state.move_towards(Some(mine))?)
    }
}

use tracing::debug;

use crate::infra::Move;
use crate::planner::strategies::DecisionMaker;
use crate::planner::{DecisionError, TurnState};

/// Goes drinking when hurt, or tops up when a pub is right here anyway.
pub struct HealingDecisionMaker;

impl DecisionMaker for HealingDecisionMaker {
    fn name(&self) -> &'static str {
        "Healing"
    }

    fn wants_to_act(&mut self, state: &TurnState<'_>) -> bool {
        let policy = state.policy;
        let life = state.me().life;
        if life < policy.heal_life {
            debug!("low life ({}), healing", life);
            true
        } else if life < policy.top_off_life && state.next_to_closest_pub() {
            debug!("topping off at the pub");
            true
        } else {
            false
        }
    }

    fn take_action(&mut self, state: &TurnState<'_>) -> Result<Move, DecisionError> {
        Ok(state.move_towards(state.closest_pub())?)
    }
}

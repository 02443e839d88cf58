use tracing::debug;

use crate::infra::Move;
use crate::planner::strategies::DecisionMaker;
use crate::planner::{DecisionError, TurnState};

/// Dies on purpose next to a mine so the respawn crushes the enemy camping
/// on our spawn point.
pub struct TelefragDecisionMaker;

impl DecisionMaker for TelefragDecisionMaker {
    fn name(&self) -> &'static str {
        "Telefrag"
    }

    fn wants_to_act(&mut self, state: &TurnState<'_>) -> bool {
        let me = state.me();
        let Some(target) = state.snapshot.enemy_at(&me.spawn) else {
            return false;
        };
        if target.mine_count <= me.mine_count {
            debug!("hero {} on my spawn is not worth it", target.id);
            return false;
        }
        if me.life > state.policy.hit_damage || state.adjacent_capturable_mine().is_none() {
            debug!("telefrag target {} found, but no way to die this turn", target.id);
            return false;
        }
        true
    }

    #[tracing::instrument(level = "debug", skip_all, fields(maker = "Telefrag"))]
    fn take_action(&mut self, state: &TurnState<'_>) -> Result<Move, DecisionError> {
        debug!("telefragging");
        Ok(state.move_towards(state.adjacent_capturable_mine())?)
    }
}

use tracing::debug;

use crate::infra::Move;
use crate::planner::strategies::DecisionMaker;
use crate::planner::{DecisionError, TurnState};

/// Far ahead of everyone: stop taking risks and sit next to a pub.
pub struct InnCamperDecisionMaker;

impl DecisionMaker for InnCamperDecisionMaker {
    fn name(&self) -> &'static str {
        "Inn camper"
    }

    fn wants_to_act(&mut self, state: &TurnState<'_>) -> bool {
        let policy = state.policy;
        let me = state.me();
        let mut enemies = state.snapshot.enemies().peekable();
        if enemies.peek().is_none() {
            return false;
        }

        for enemy in enemies {
            if me.gold < enemy.gold.saturating_add(policy.gold_margin)
                || me.mine_count < enemy.mine_count.saturating_add(policy.mine_margin)
            {
                debug!("hero {} is almost as rich as me", enemy.name);
                return false;
            }
        }
        true
    }

    #[tracing::instrument(level = "debug", skip_all, fields(maker = "Inn camper"))]
    fn take_action(&mut self, state: &TurnState<'_>) -> Result<Move, DecisionError> {
        let me = state.me();
        if state.stands_adjacent_to_pub(&me.position) && me.life > state.policy.camp_life {
            debug!("camping at a pub");
            return Ok(Move::Stay);
        }
        debug!("heading to a pub");
        Ok(state.move_towards(state.closest_pub())?)
    }
}

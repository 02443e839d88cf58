use tracing::debug;

use crate::infra::Move;
use crate::planner::strategies::DecisionMaker;
use crate::planner::{CombatEvaluator, DecisionError, TurnState};
use crate::state::Hero;

/// Fights when an enemy is about to be in reach.
pub struct CombatDecisionMaker {
    target: Option<u32>,
}

impl CombatDecisionMaker {
    pub fn new() -> Self {
        Self { target: None }
    }

    /// The enemy survives more hits than we do.
    fn outlives_me(state: &TurnState<'_>, enemy: &Hero) -> bool {
        let hit = state.policy.hit_damage;
        enemy.hits_to_kill(hit) > state.me().hits_to_kill(hit)
    }

    fn flee(state: &TurnState<'_>) -> Result<Move, DecisionError> {
        debug!("fleeing to the closest pub");
        Ok(state.move_towards(state.closest_pub())?)
    }
}

impl Default for CombatDecisionMaker {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionMaker for CombatDecisionMaker {
    fn name(&self) -> &'static str {
        "Combat"
    }

    fn wants_to_act(&mut self, state: &TurnState<'_>) -> bool {
        self.target = None;
        let Some(enemy) = state.closest_enemy() else {
            return false;
        };
        let close = state
            .snapshot
            .board()
            .tile_id(&enemy.position)
            .and_then(|tile| state.moves_to_reach(tile))
            .is_some_and(|moves| moves < state.policy.combat_radius);
        if close {
            self.target = Some(enemy.id);
        }
        close
    }

    #[tracing::instrument(level = "debug", skip_all, fields(maker = "Combat"))]
    fn take_action(&mut self, state: &TurnState<'_>) -> Result<Move, DecisionError> {
        let policy = state.policy;
        let me = state.me();
        let Some(enemy) = self.target.and_then(|id| state.snapshot.hero(id)) else {
            return Ok(Move::Stay);
        };

        if state.stands_adjacent_to_pub(&me.position) && state.stands_adjacent_to_pub(&enemy.position)
        {
            // both at the bar: whoever walks away first breaks the standoff
            if me.life > policy.standoff_life {
                debug!("pub standoff, healthy enough to go looting");
                let goal = state.closest_capturable_mine().or(state.closest_pub());
                return Ok(state.move_towards(goal)?);
            }
            debug!("pub standoff, drinking");
            return Ok(state.move_towards(state.closest_pub())?);
        }

        if state.next_to_closest_pub() {
            if me.life < policy.drink_life {
                debug!("next to a pub with {} life, drinking", me.life);
                return Ok(state.move_towards(state.closest_pub())?);
            }
            debug!("holding next to the pub");
            return Ok(Move::Stay);
        }

        if Self::outlives_me(state, enemy) || state.stands_adjacent_to_pub(&enemy.position) {
            return Self::flee(state);
        }

        let evaluator = CombatEvaluator::new(state, enemy);
        let best = evaluator.best_tile();
        debug!(
            "engaging hero {} from {}",
            enemy.id,
            state.position_of(best)
        );
        Ok(state.move_towards(Some(best))?)
    }
}

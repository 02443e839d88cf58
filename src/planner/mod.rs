mod evaluator;
mod policy;
pub mod strategies;
mod turn_state;

use std::time::Instant;

use thiserror::Error;

use crate::infra::{Dijkstra, GameObserver, Move, PathError, apply_threat_costs};
use crate::state::Snapshot;

pub use evaluator::{CombatEvaluator, INVALID_TILE};
pub use policy::Policy;
pub use strategies::DecisionMaker;
pub use turn_state::TurnState;

#[derive(Debug, Error)]
pub enum DecisionError {
    #[error("inconsistent search result: {0}")]
    Path(#[from] PathError),
}

/// Turns a snapshot into a move: prices the board, searches it once, then
/// asks the decision makers in priority order.
pub struct DecisionEngine {
    policy: Policy,
    makers: Vec<Box<dyn DecisionMaker>>,
    observer: Box<dyn GameObserver>,
}

impl DecisionEngine {
    pub fn new(policy: Policy, observer: impl GameObserver + 'static) -> Self {
        Self::with_makers(policy, observer, strategies::default_chain())
    }

    pub fn with_makers(
        policy: Policy,
        observer: impl GameObserver + 'static,
        makers: Vec<Box<dyn DecisionMaker>>,
    ) -> Self {
        Self {
            policy,
            makers,
            observer: Box::new(observer),
        }
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn observer_mut(&mut self) -> &mut dyn GameObserver {
        self.observer.as_mut()
    }

    /// Decide this turn's move. Costs and search results are written into the
    /// snapshot's board.
    #[tracing::instrument(level = "debug", skip_all, fields(turn = snapshot.turn))]
    pub fn decide(&mut self, snapshot: &mut Snapshot) -> Result<Move, DecisionError> {
        let start = Instant::now();
        self.observer.on_turn_start(snapshot);

        apply_threat_costs(snapshot, &self.policy.threat);
        let source = snapshot.current_tile();
        let discoveries = Dijkstra::run(snapshot, source);

        let snapshot: &Snapshot = snapshot;
        let state = TurnState::new(snapshot, &self.policy, discoveries);
        self.observer.on_paths_computed(&state);

        let mut chosen = Move::Stay;
        for maker in self.makers.iter_mut() {
            let elapsed = start.elapsed();
            if elapsed >= self.policy.turn_budget {
                self.observer.on_deadline_exceeded(elapsed);
                break;
            }

            self.observer.on_maker_considered(maker.name());
            if maker.wants_to_act(&state) {
                chosen = maker.take_action(&state)?;
                self.observer.on_maker_selected(maker.name(), chosen, &state);
                break;
            }
        }

        self.observer
            .on_turn_finished(snapshot.turn, chosen, start.elapsed());
        Ok(chosen)
    }
}

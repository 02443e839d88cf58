pub mod combat;
pub mod healing;
pub mod inn_camper;
pub mod looting;
pub mod telefrag;

use crate::infra::Move;
use crate::planner::{DecisionError, TurnState};

/// One link of the decision chain. Makers are asked in a fixed order and the
/// first one that wants the turn decides the move.
pub trait DecisionMaker {
    /// Human readable name, used in logs.
    fn name(&self) -> &'static str;

    /// Whether this maker claims the turn.
    fn wants_to_act(&mut self, state: &TurnState<'_>) -> bool;

    /// The move to make. Only called right after `wants_to_act` returned true
    /// for the same turn.
    fn take_action(&mut self, state: &TurnState<'_>) -> Result<Move, DecisionError>;
}

/// The chain in priority order, highest first.
pub fn default_chain() -> Vec<Box<dyn DecisionMaker>> {
    vec![
        Box::new(combat::CombatDecisionMaker::new()),
        Box::new(inn_camper::InnCamperDecisionMaker),
        Box::new(telefrag::TelefragDecisionMaker),
        Box::new(healing::HealingDecisionMaker),
        Box::new(looting::LootingDecisionMaker),
    ]
}

pub mod infra;
pub mod planner;
pub mod state;

// Re-export commonly used types for convenience
pub use infra::{Game, Move, Position};
pub use planner::{DecisionEngine, Policy};
pub use state::Snapshot;

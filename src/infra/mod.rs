mod default_observer;
mod game;
mod game_observer;
mod pathfinding;
mod replay;
mod threat;
mod translate;
mod types;

pub use default_observer::DefaultObserver;
pub use game::Game;
pub use game_observer::GameObserver;
pub use pathfinding::{Dijkstra, Discoveries};
pub use replay::ReplayFile;
pub use threat::{ThreatCosts, apply_threat_costs};
pub use translate::{PathError, move_towards};
pub use types::{Move, Position};

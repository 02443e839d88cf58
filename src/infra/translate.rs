use thiserror::Error;
use tracing::trace;

use crate::infra::{Move, Position};
use crate::state::{BoardGraph, TileId};

/// A predecessor chain that cannot come from a search rooted at the hero.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("predecessor chain from {goal} never reaches {origin}")]
    BrokenChain { goal: Position, origin: Position },

    #[error("first step {step} is not next to {origin}")]
    NonAdjacentStep { step: Position, origin: Position },
}

/// The one step that starts the searched path from `current` to `goal`.
///
/// `Stay` when there is no goal, when the goal is where we stand, or when the
/// last search never reached it.
pub fn move_towards(
    board: &BoardGraph,
    current: TileId,
    goal: Option<TileId>,
) -> Result<Move, PathError> {
    let Some(goal) = goal else {
        return Ok(Move::Stay);
    };
    if goal == current || !board.tile(goal).is_reachable() {
        return Ok(Move::Stay);
    }

    let origin = board.tile(current).position;
    let mut step = goal;
    let mut walked = 0;
    loop {
        match board.tile(step).predecessor {
            Some(prev) if prev == current => break,
            Some(prev) if walked < board.len() => {
                step = prev;
                walked += 1;
            }
            _ => {
                return Err(PathError::BrokenChain {
                    goal: board.tile(goal).position,
                    origin,
                });
            }
        }
    }

    let step_pos = board.tile(step).position;
    trace!("towards {} via {}", board.tile(goal).position, step_pos);
    Move::between(origin, step_pos).ok_or(PathError::NonAdjacentStep {
        step: step_pos,
        origin,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::Dijkstra;
    use crate::state::fixtures;

    fn searched(rows: &[&str]) -> crate::state::Snapshot {
        let mut snapshot = fixtures::snapshot(rows, |h| h);
        let source = snapshot.current_tile();
        Dijkstra::run(&mut snapshot, source);
        snapshot
    }

    fn tile(snapshot: &crate::state::Snapshot, x: i32, y: i32) -> TileId {
        snapshot.board().tile_id(&Position::new(x, y)).unwrap()
    }

    #[test]
    fn test_goal_is_current_tile() {
        let snapshot = searched(&["      ", "  @1  ", "      "]);
        let current = snapshot.current_tile();
        assert_eq!(move_towards(snapshot.board(), current, Some(current)), Ok(Move::Stay));
        assert_eq!(move_towards(snapshot.board(), current, None), Ok(Move::Stay));
    }

    #[test]
    fn test_adjacent_goals() {
        let snapshot = searched(&["      ", "  @1  ", "      "]);
        let board = snapshot.board();
        let current = snapshot.current_tile();
        assert_eq!(move_towards(board, current, Some(tile(&snapshot, 0, 1))), Ok(Move::North));
        assert_eq!(move_towards(board, current, Some(tile(&snapshot, 2, 1))), Ok(Move::South));
        assert_eq!(move_towards(board, current, Some(tile(&snapshot, 1, 2))), Ok(Move::East));
        assert_eq!(move_towards(board, current, Some(tile(&snapshot, 1, 0))), Ok(Move::West));
    }

    #[test]
    fn test_follows_path_around_wall() {
        let snapshot = searched(&["@1##  ", "  ##  ", "      "]);
        let goal = tile(&snapshot, 0, 2);
        let mv = move_towards(snapshot.board(), snapshot.current_tile(), Some(goal));
        assert_eq!(mv, Ok(Move::South));
    }

    #[test]
    fn test_unreachable_goal_stays() {
        let snapshot = searched(&["@1##  ", "####  ", "      "]);
        let goal = tile(&snapshot, 2, 2);
        let mv = move_towards(snapshot.board(), snapshot.current_tile(), Some(goal));
        assert_eq!(mv, Ok(Move::Stay));
    }

    #[test]
    fn test_broken_chain_is_an_error() {
        let mut snapshot = searched(&["@1    ", "      ", "      "]);
        let goal = tile(&snapshot, 2, 2);
        let detached = tile(&snapshot, 2, 1);
        let (board, _) = snapshot.board_and_landmarks();
        board.tile_mut(goal).predecessor = Some(detached);
        board.tile_mut(detached).predecessor = None;

        let mv = move_towards(board, tile_of(board, 0, 0), Some(goal));
        assert!(matches!(mv, Err(PathError::BrokenChain { .. })));
    }

    #[test]
    fn test_non_adjacent_first_step_is_an_error() {
        let mut snapshot = searched(&["@1    ", "      ", "      "]);
        let current = snapshot.current_tile();
        let goal = tile(&snapshot, 2, 2);
        let (board, _) = snapshot.board_and_landmarks();
        board.tile_mut(goal).predecessor = Some(current);

        let mv = move_towards(board, current, Some(goal));
        assert!(matches!(mv, Err(PathError::NonAdjacentStep { .. })));
    }

    fn tile_of(board: &BoardGraph, x: i32, y: i32) -> TileId {
        board.tile_id(&Position::new(x, y)).unwrap()
    }
}

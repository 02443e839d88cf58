use tracing::trace;

use crate::state::Snapshot;

/// Constants of the per-turn danger landscape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThreatCosts {
    /// Hops around an enemy that receive a penalty.
    pub radius: u32,
    /// Penalty one hop away from an enemy is `base - 1`, decaying by one per hop.
    pub base: u32,
    /// Added to each enemy's spawn tile.
    pub spawn_point: u32,
    /// Added to the tile an enemy stands on. Dwarfs any real path cost.
    pub occupied: u32,
}

impl Default for ThreatCosts {
    fn default() -> Self {
        Self {
            radius: 4,
            base: 4,
            spawn_point: 20,
            occupied: 1000,
        }
    }
}

/// Reset every tile and then price each one by its closeness to enemies.
///
/// Contributions of several enemies add up. Mines and pubs always end at the
/// baseline cost of 1, and the spread never walks across them.
#[tracing::instrument(level = "trace", skip_all)]
pub fn apply_threat_costs(snapshot: &mut Snapshot, costs: &ThreatCosts) {
    let enemies: Vec<_> = snapshot
        .enemies()
        .map(|enemy| (enemy.position, enemy.spawn))
        .collect();

    let (board, landmarks) = snapshot.board_and_landmarks();
    board.reset();

    for (position, spawn) in enemies {
        if let Some(spawn_tile) = board.tile_id(&spawn) {
            let tile = board.tile_mut(spawn_tile);
            tile.cost = tile.cost.saturating_add(costs.spawn_point);
        }

        let Some(enemy_tile) = board.tile_id(&position) else {
            continue;
        };

        let reached = board.within_hops(enemy_tile, costs.radius, |id| {
            landmarks.at(&board.tile(id).position).is_none()
        });
        for (id, depth) in reached {
            let penalty = if depth == 0 {
                costs.occupied
            } else {
                costs.base.saturating_sub(depth)
            };
            let tile = board.tile_mut(id);
            tile.cost = tile.cost.saturating_add(penalty);
        }
        trace!("threat spread from enemy at {}", position);
    }

    for id in board.tile_ids() {
        if landmarks.at(&board.tile(id).position).is_some() {
            board.tile_mut(id).cost = 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::Position;
    use crate::state::fixtures;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn cost_at(snapshot: &Snapshot, x: i32, y: i32) -> u32 {
        snapshot.board().tile_at(&Position::new(x, y)).unwrap().cost
    }

    #[test]
    fn test_no_enemies_keeps_baseline() {
        let mut snapshot = fixtures::snapshot(&["@1    ", "      ", "    $-"], |h| h);
        apply_threat_costs(&mut snapshot, &ThreatCosts::default());
        assert!(snapshot.board().all_tiles().all(|t| t.cost == 1));
    }

    #[test]
    fn test_cost_decays_with_distance() {
        let mut snapshot = fixtures::snapshot(
            &[
                "@1            ",
                "              ",
                "              ",
                "              ",
                "              ",
                "              ",
                "            @2",
            ],
            |h| h,
        );
        let costs = ThreatCosts::default();
        apply_threat_costs(&mut snapshot, &costs);

        // enemy at (6, 6), own spawn is the same tile
        assert_eq!(cost_at(&snapshot, 6, 6), 1 + costs.spawn_point + costs.occupied);
        assert_eq!(cost_at(&snapshot, 6, 5), 1 + 3);
        assert_eq!(cost_at(&snapshot, 5, 5), 1 + 2);
        assert_eq!(cost_at(&snapshot, 6, 3), 1 + 1);
        assert_eq!(cost_at(&snapshot, 6, 2), 1);
        assert_eq!(cost_at(&snapshot, 0, 0), 1);
    }

    #[test]
    fn test_landmarks_are_exempt() {
        let mut snapshot = fixtures::snapshot(&["@1    ", "  $-[]", "  @2  "], |h| h);
        apply_threat_costs(&mut snapshot, &ThreatCosts::default());
        assert_eq!(cost_at(&snapshot, 1, 1), 1);
        assert_eq!(cost_at(&snapshot, 1, 2), 1);
        assert!(cost_at(&snapshot, 2, 0) > 1);
    }

    #[test]
    fn test_spread_stops_at_landmarks() {
        // the mine seals the corridor, so the left end stays untouched
        let mut snapshot = fixtures::snapshot(
            &["@1  $-  @2", "##########", "##########", "##########", "##########"],
            |h| h,
        );
        apply_threat_costs(&mut snapshot, &ThreatCosts::default());
        assert_eq!(cost_at(&snapshot, 0, 1), 1);
        assert_eq!(cost_at(&snapshot, 0, 3), 4);
    }

    #[test]
    fn test_enemies_accumulate() {
        let mut snapshot = fixtures::snapshot(&["@2  @3", "      ", "@1    "], |h| h);
        let costs = ThreatCosts::default();
        apply_threat_costs(&mut snapshot, &costs);
        // (0, 1) is one hop from both enemies
        assert_eq!(cost_at(&snapshot, 0, 1), 1 + 3 + 3);
    }

    #[test]
    fn test_random_boards_threat_bounds() {
        let costs = ThreatCosts::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let size = rng.random_range(4..9usize);
            let mut rows: Vec<String> = (0..size)
                .map(|_| {
                    (0..size)
                        .map(|_| if rng.random_bool(0.2) { "##" } else { "  " })
                        .collect()
                })
                .collect();
            rows[0].replace_range(0..2, "@1");
            let (ex, ey) = (size - 1, size - 1);
            rows[ex].replace_range(ey * 2..ey * 2 + 2, "@2");
            let row_refs: Vec<&str> = rows.iter().map(|r| r.as_str()).collect();

            let mut snapshot = fixtures::snapshot(&row_refs, |h| h);
            apply_threat_costs(&mut snapshot, &costs);

            let enemy = Position::new(ex as i32, ey as i32);
            assert!(cost_at(&snapshot, enemy.x, enemy.y) >= costs.occupied);
            for tile in snapshot.board().all_tiles() {
                assert!(tile.cost >= 1);
                if tile.position.distance(&enemy) > costs.radius as i32 {
                    assert_eq!(tile.cost, 1, "tile {} too far to be threatened", tile.position);
                }
            }
        }
    }
}

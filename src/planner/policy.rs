use std::env;
use std::time::Duration;

use crate::infra::ThreatCosts;

/// Tunable thresholds of the decision makers.
///
/// The values are not known to be optimal. Keep `heal_life < top_off_life <
/// standoff_life` when tuning.
#[derive(Clone, Debug, PartialEq)]
pub struct Policy {
    /// Below this life the hero goes drinking, and looting turns back.
    pub heal_life: u32,
    /// Below this life a hero next to a pub tops up.
    pub top_off_life: u32,
    /// In a standoff at a pub, above this life the hero leaves to loot.
    pub standoff_life: u32,
    /// Next to the pub in a fight, below this life the hero drinks.
    pub drink_life: u32,
    /// An inn camper above this life holds position.
    pub camp_life: u32,
    /// Combat starts when the closest enemy is fewer moves away than this.
    pub combat_radius: u32,
    /// Hops around an enemy considered within its striking reach.
    pub threatened_radius: u32,
    pub gold_margin: u32,
    pub mine_margin: u32,
    pub hit_damage: u32,
    pub dealt_damage_value: i32,
    pub received_damage_value: i32,
    pub closing_bonus: i32,
    pub threat: ThreatCosts,
    pub turn_budget: Duration,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            heal_life: 50,
            top_off_life: 80,
            standoff_life: 90,
            drink_life: 50,
            camp_life: 50,
            combat_radius: 2,
            threatened_radius: 2,
            gold_margin: 200,
            mine_margin: 2,
            hit_damage: 20,
            dealt_damage_value: 21,
            received_damage_value: 20,
            closing_bonus: 1,
            threat: ThreatCosts::default(),
            turn_budget: Duration::from_millis(40),
        }
    }
}

impl Policy {
    /// Defaults overridden by `VINBOT_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` knows. Values that do not
    /// parse are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_u32 = |key: &str, default: u32| -> u32 {
            lookup(key)
                .and_then(|val| val.trim().parse::<u32>().ok())
                .unwrap_or(default)
        };
        let get_i32 = |key: &str, default: i32| -> i32 {
            lookup(key)
                .and_then(|val| val.trim().parse::<i32>().ok())
                .unwrap_or(default)
        };

        let d = Self::default();
        Self {
            heal_life: get_u32("VINBOT_HEAL_LIFE", d.heal_life),
            top_off_life: get_u32("VINBOT_TOP_OFF_LIFE", d.top_off_life),
            standoff_life: get_u32("VINBOT_STANDOFF_LIFE", d.standoff_life),
            drink_life: get_u32("VINBOT_DRINK_LIFE", d.drink_life),
            camp_life: get_u32("VINBOT_CAMP_LIFE", d.camp_life),
            combat_radius: get_u32("VINBOT_COMBAT_RADIUS", d.combat_radius),
            threatened_radius: get_u32("VINBOT_THREATENED_RADIUS", d.threatened_radius),
            gold_margin: get_u32("VINBOT_GOLD_MARGIN", d.gold_margin),
            mine_margin: get_u32("VINBOT_MINE_MARGIN", d.mine_margin),
            hit_damage: get_u32("VINBOT_HIT_DAMAGE", d.hit_damage).max(1),
            dealt_damage_value: get_i32("VINBOT_DEALT_DAMAGE_VALUE", d.dealt_damage_value),
            received_damage_value: get_i32(
                "VINBOT_RECEIVED_DAMAGE_VALUE",
                d.received_damage_value,
            ),
            closing_bonus: get_i32("VINBOT_CLOSING_BONUS", d.closing_bonus),
            threat: ThreatCosts {
                radius: get_u32("VINBOT_THREAT_RADIUS", d.threat.radius),
                base: get_u32("VINBOT_THREAT_BASE", d.threat.base),
                spawn_point: get_u32("VINBOT_SPAWN_POINT_COST", d.threat.spawn_point),
                occupied: get_u32("VINBOT_OCCUPIED_COST", d.threat.occupied),
            },
            turn_budget: Duration::from_millis(u64::from(get_u32(
                "VINBOT_TURN_BUDGET_MS",
                d.turn_budget.as_millis() as u32,
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_keep_threshold_order() {
        let policy = Policy::default();
        assert!(policy.heal_life < policy.top_off_life);
        assert!(policy.top_off_life < policy.standoff_life);
        assert!(policy.threat.occupied > policy.threat.spawn_point);
    }

    #[test]
    fn test_lookup_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("VINBOT_HEAL_LIFE", "40"),
            ("VINBOT_THREAT_RADIUS", " 3 "),
            ("VINBOT_TURN_BUDGET_MS", "15"),
            ("VINBOT_GOLD_MARGIN", "lots"),
        ]);
        let policy = Policy::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(policy.heal_life, 40);
        assert_eq!(policy.threat.radius, 3);
        assert_eq!(policy.turn_budget, Duration::from_millis(15));
        assert_eq!(policy.gold_margin, 200);
        assert_eq!(policy.top_off_life, 80);
    }
}

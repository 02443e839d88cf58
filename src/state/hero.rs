use crate::infra::Position;

/// An agent on the board, ours or a rival.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hero {
    pub id: u32,
    pub name: String,
    pub position: Position,
    /// 0 to 100. A hero at 0 is respawning.
    pub life: u32,
    pub gold: u32,
    pub mine_count: u32,
    pub spawn: Position,
}

impl Hero {
    pub fn new(id: u32, position: Position) -> Self {
        Self {
            id,
            name: format!("hero{}", id),
            position,
            life: 100,
            gold: 0,
            mine_count: 0,
            spawn: position,
        }
    }

    pub fn with_life(mut self, life: u32) -> Self {
        self.life = life;
        self
    }

    pub fn with_gold(mut self, gold: u32) -> Self {
        self.gold = gold;
        self
    }

    pub fn with_mine_count(mut self, mine_count: u32) -> Self {
        self.mine_count = mine_count;
        self
    }

    pub fn with_spawn(mut self, spawn: Position) -> Self {
        self.spawn = spawn;
        self
    }

    /// Hits of `damage` this hero survives.
    pub fn hits_to_kill(&self, damage: u32) -> u32 {
        self.life / damage.max(1)
    }
}

/// A capturable gold mine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mine {
    pub position: Position,
    pub owner: Option<u32>,
}

/// A tavern. Heroes drink here to heal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pub {
    pub position: Position,
}

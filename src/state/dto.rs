//! The game server's JSON game state.

use serde::Deserialize;

use crate::infra::Position;
use crate::state::{Hero, Snapshot, SnapshotError};

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateDto {
    pub game: GameDto,
    pub hero: HeroDto,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub view_url: String,
    #[serde(default)]
    pub play_url: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDto {
    pub id: String,
    #[serde(default)]
    pub turn: u32,
    #[serde(default)]
    pub max_turns: u32,
    pub heroes: Vec<HeroDto>,
    pub board: BoardDto,
    #[serde(default)]
    pub finished: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct BoardDto {
    pub size: usize,
    pub tiles: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroDto {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    pub pos: Position,
    pub life: u32,
    #[serde(default)]
    pub gold: u32,
    #[serde(default)]
    pub mine_count: u32,
    pub spawn_pos: Position,
}

impl From<&HeroDto> for Hero {
    fn from(dto: &HeroDto) -> Self {
        Hero {
            id: dto.id,
            name: dto.name.clone(),
            position: dto.pos,
            life: dto.life,
            gold: dto.gold,
            mine_count: dto.mine_count,
            spawn: dto.spawn_pos,
        }
    }
}

impl TryFrom<&GameStateDto> for Snapshot {
    type Error = SnapshotError;

    fn try_from(dto: &GameStateDto) -> Result<Self, Self::Error> {
        let heroes = dto.game.heroes.iter().map(Hero::from).collect();
        let mut snapshot = Snapshot::new(
            dto.hero.id,
            heroes,
            dto.game.board.size,
            &dto.game.board.tiles,
        )?;
        snapshot.game_id = dto.game.id.clone();
        snapshot.turn = dto.game.turn;
        snapshot.finished = dto.game.finished;
        Ok(snapshot)
    }
}

impl Snapshot {
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let dto: GameStateDto = serde_json::from_str(json)?;
        Snapshot::try_from(&dto)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const SAMPLE: &str = r#"{
        "game": {
            "id": "s2xh3aig",
            "turn": 4,
            "maxTurns": 1200,
            "heroes": [
                {"id": 1, "name": "vinbot", "userId": "j07ws669", "elo": 1200,
                 "pos": {"x": 0, "y": 0}, "life": 60, "gold": 10, "mineCount": 1,
                 "spawnPos": {"x": 0, "y": 0}, "crashed": false},
                {"id": 2, "name": "rival", "pos": {"x": 2, "y": 2}, "life": 100,
                 "gold": 0, "mineCount": 0, "spawnPos": {"x": 2, "y": 2}}
            ],
            "board": {"size": 3, "tiles": "@1  $1  ##[]$-  @2"},
            "finished": false
        },
        "hero": {"id": 1, "name": "vinbot", "pos": {"x": 0, "y": 0}, "life": 60,
                 "gold": 10, "mineCount": 1, "spawnPos": {"x": 0, "y": 0}},
        "token": "lte0",
        "viewUrl": "http://localhost/s2xh3aig",
        "playUrl": "http://localhost/api/s2xh3aig/lte0/play"
    }"#;

    #[test]
    fn test_parse_server_state() {
        let snapshot = Snapshot::from_json(SAMPLE).unwrap();
        assert_eq!(snapshot.game_id, "s2xh3aig");
        assert_eq!(snapshot.turn, 4);
        assert_eq!(snapshot.me().life, 60);
        assert_eq!(snapshot.me().mine_count, 1);
        assert_eq!(snapshot.board().len(), 8);
        assert_eq!(snapshot.mine_at(&Position::new(0, 2)).unwrap().owner, Some(1));
        assert_eq!(snapshot.mine_at(&Position::new(2, 0)).unwrap().owner, None);
        assert!(snapshot.is_pub(&Position::new(1, 2)));
        assert_eq!(snapshot.hero_at(&Position::new(2, 2)).unwrap().name, "rival");
    }

    #[test]
    fn test_huge_board_size_is_an_error() {
        let mut value: serde_json::Value = serde_json::from_str(SAMPLE).unwrap();
        value["game"]["board"]["size"] = serde_json::json!(8589934592u64);
        let err = Snapshot::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, SnapshotError::BoardTooLarge(8589934592)));
    }

    #[test]
    fn test_malformed_json() {
        let err = Snapshot::from_json("{\"game\": 3}").unwrap_err();
        assert!(matches!(err, SnapshotError::Json(_)));
    }
}

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use time::{OffsetDateTime, format_description};

use crate::infra::Move;

#[derive(Serialize)]
struct ReplayEntry<'a> {
    turn: u32,
    #[serde(rename = "move")]
    mv: &'a str,
    state: &'a serde_json::Value,
}

/// Append-only record of a game: one JSON line per turn with the raw state
/// and the move we answered.
pub struct ReplayFile {
    file: File,
    path: PathBuf,
}

impl ReplayFile {
    pub fn new(replays_folder: &str, game_id: &str) -> io::Result<Self> {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        let format = format_description::parse("[year][month][day]-[hour][minute][second]")
            .map_err(io::Error::other)?;
        let date_time_str = now.format(&format).map_err(io::Error::other)?;

        let path = Path::new(replays_folder).join(format!("{} - {}.jsonl", date_time_str, game_id));

        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(&path)?;
        Ok(ReplayFile { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&mut self, turn: u32, mv: Move, state: &serde_json::Value) -> io::Result<()> {
        let entry = ReplayEntry {
            turn,
            mv: mv.as_str_name(),
            state,
        };
        serde_json::to_writer(&mut self.file, &entry)?;
        self.file.write_all(b"\n")?;
        self.file.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_one_line_per_turn() {
        let folder = std::env::temp_dir().join(format!("vinbot-replay-{}", std::process::id()));
        let folder_str = folder.to_string_lossy().to_string();

        let mut replay = ReplayFile::new(&folder_str, "g1").unwrap();
        let state = serde_json::json!({"game": {"id": "g1", "turn": 3}});
        replay.append(3, Move::North, &state).unwrap();
        replay.append(4, Move::Stay, &state).unwrap();

        let content = std::fs::read_to_string(replay.path()).unwrap();
        let lines: Vec<serde_json::Value> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["move"], "North");
        assert_eq!(lines[1]["turn"], 4);
        assert_eq!(lines[1]["state"]["game"]["id"], "g1");
        assert!(replay.path().to_string_lossy().ends_with(" - g1.jsonl"));

        std::fs::remove_dir_all(folder).unwrap();
    }
}

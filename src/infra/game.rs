use serde::Deserialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{error, warn};

use crate::infra::replay::ReplayFile;
use crate::infra::Move;
use crate::planner::DecisionEngine;
use crate::state::dto::GameStateDto;
use crate::state::{Snapshot, SnapshotError};

/// Plays one game over a line protocol: a JSON game state per input line,
/// a move name per output line.
pub struct Game {
    engine: DecisionEngine,
    replays_folder: Option<String>,
    replay_file: Option<ReplayFile>,
}

impl Game {
    pub fn new(engine: DecisionEngine, replays_folder: Option<String>) -> Self {
        Self {
            engine,
            replays_folder,
            replay_file: None,
        }
    }

    /// Returns the number of moves sent.
    pub async fn run<R, W>(&mut self, reader: R, mut writer: W) -> Result<u32, Box<dyn std::error::Error>>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        let mut game_id: Option<String> = None;
        let mut moves_sent = 0;

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (raw, mut snapshot) = match parse_state(line) {
                Ok(parsed) => parsed,
                Err(e) => {
                    error!("unusable game state, staying: {}", e);
                    send(&mut writer, Move::Stay).await?;
                    moves_sent += 1;
                    continue;
                }
            };

            if game_id.is_none() {
                self.engine.observer_mut().on_game_start(&snapshot);
                self.open_replay(&snapshot.game_id);
                game_id = Some(snapshot.game_id.clone());
            }
            if snapshot.finished {
                break;
            }

            let mv = match self.engine.decide(&mut snapshot) {
                Ok(mv) => mv,
                Err(e) => {
                    error!("turn {}: {}, staying", snapshot.turn, e);
                    Move::Stay
                }
            };

            if let Some(ref mut replay_file) = self.replay_file
                && let Err(e) = replay_file.append(snapshot.turn, mv, &raw)
            {
                warn!("could not write replay: {}", e);
            }

            send(&mut writer, mv).await?;
            moves_sent += 1;
        }

        self.engine
            .observer_mut()
            .on_game_finished(game_id.as_deref().unwrap_or("?"), moves_sent);
        Ok(moves_sent)
    }

    fn open_replay(&mut self, game_id: &str) {
        let Some(folder) = &self.replays_folder else {
            return;
        };
        match ReplayFile::new(folder, game_id) {
            Ok(file) => self.replay_file = Some(file),
            Err(e) => warn!("replays disabled, cannot create file in {}: {}", folder, e),
        }
    }
}

fn parse_state(line: &str) -> Result<(serde_json::Value, Snapshot), SnapshotError> {
    let raw: serde_json::Value = serde_json::from_str(line)?;
    let dto = GameStateDto::deserialize(&raw)?;
    let snapshot = Snapshot::try_from(&dto)?;
    Ok((raw, snapshot))
}

async fn send<W: AsyncWrite + Unpin>(writer: &mut W, mv: Move) -> std::io::Result<()> {
    writer.write_all(mv.as_str_name().as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await
}

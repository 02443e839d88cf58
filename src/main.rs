use std::env;

use dotenv::dotenv;
use tokio::io::BufReader;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use vinbot::infra::DefaultObserver;
use vinbot::{DecisionEngine, Game, Policy};

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vinbot=debug,info"));

    // stdout carries the moves
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    init_logging();

    let policy = Policy::from_env();
    let replays_folder = env::var("VINBOT_REPLAYS_FOLDER").ok();
    tracing::info!("Replays folder: {:?}", replays_folder);

    let engine = DecisionEngine::new(policy, DefaultObserver);
    tracing::debug!("Policy: {:?}", engine.policy());
    let mut game = Game::new(engine, replays_folder);

    let stdin = BufReader::new(tokio::io::stdin());
    let turns = game.run(stdin, tokio::io::stdout()).await?;
    tracing::info!("Played {} turns", turns);

    Ok(())
}

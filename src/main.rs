use anyhow::{Context, Result};
use log::info;

use guessing_game::{Console, GameConfig, GuessingGame};

const LOWEST: i64 = 1;
const HIGHEST: i64 = 100;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let game_config = GameConfig {
        lowest: LOWEST,
        highest: HIGHEST,
    };
    let game = GuessingGame::new(game_config).context("Unable to start game")?;
    let report = game.play(Console::stdio()).await?;
    info!(
        "Session over: {} guesses in {} input requests, solved: {}",
        report.guesses, report.requests, report.solved
    );
    Ok(())
}

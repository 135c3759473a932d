use std::ops::RangeInclusive;

use anyhow::Result;
use log::{debug, info, trace, warn};
use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::{
    console::Console,
    error::{GuessError, parse_guess},
    number_source::NumberSource,
    outcome::Outcome,
};

const PROMPT: &str = "What is your number? ";
const INVALID_INPUT: &str = "Please enter a valid number.";

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub lowest: i64,
    pub highest: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            lowest: 1,
            highest: 100,
        }
    }
}

impl GameConfig {
    pub fn range(&self) -> Result<RangeInclusive<i64>, GuessError> {
        if self.lowest > self.highest {
            return Err(GuessError::EmptyRange {
                lowest: self.lowest,
                highest: self.highest,
            });
        }
        Ok(self.lowest..=self.highest)
    }
}

/// How a finished session went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayReport {
    /// Lines asked from the console, including invalid ones.
    pub requests: usize,
    /// Lines that parsed and were evaluated.
    pub guesses: usize,
    pub solved: bool,
}

#[derive(Debug)]
pub struct GuessingGame {
    source: NumberSource,
    target: i64,
}

impl GuessingGame {
    pub fn new(config: GameConfig) -> Result<Self, GuessError> {
        let mut source = NumberSource::new(config.range()?);
        let target = source.generate();
        debug!(
            "New game between {} and {}",
            source.range().start(),
            source.range().end()
        );
        trace!("Target is `{target}`");
        Ok(Self { source, target })
    }

    /// Skips the draw, the session plays against `target`.
    pub fn with_target(config: GameConfig, target: i64) -> Result<Self, GuessError> {
        let source = NumberSource::new(config.range()?);
        Ok(Self { source, target })
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn set_target(&mut self, target: i64) {
        self.target = target;
    }

    /// A fresh number from the game's range. The target stays as it is.
    pub fn generate(&mut self) -> i64 {
        self.source.generate()
    }

    pub fn evaluate(&self, guess: i64) -> Outcome {
        Outcome::classify(guess, self.target)
    }

    /// Runs the prompt/answer loop until the number is guessed or the input ends.
    /// The console is closed on return.
    pub async fn play<R, W>(&self, mut console: Console<R, W>) -> Result<PlayReport>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let range = self.source.range();
        console.say("Welcome to the number guessing game!").await?;
        console
            .say(&format!(
                "I'm thinking of a number between {} and {}.",
                range.start(),
                range.end()
            ))
            .await?;

        let mut guesses = 0;
        let solved = loop {
            let Some(line) = console.question(PROMPT).await? else {
                warn!("Input ended before the number was guessed");
                console.say("Goodbye!").await?;
                break false;
            };

            let guess = match parse_guess(&line) {
                Ok(guess) => guess,
                Err(err) => {
                    warn!("{err}");
                    console.say(INVALID_INPUT).await?;
                    continue;
                }
            };

            guesses += 1;
            let outcome = self.evaluate(guess);
            debug!("Guess #{guesses} `{guess}` is {outcome}");
            console.say(&outcome.to_string()).await?;

            if outcome.is_correct() {
                let attempts = if guesses == 1 { "attempt" } else { "attempts" };
                console
                    .say(&format!(
                        "Congratulations! You guessed the number in {guesses} {attempts}."
                    ))
                    .await?;
                info!("Number guessed in {guesses} {attempts}");
                break true;
            }
        };

        let report = PlayReport {
            requests: console.requests(),
            guesses,
            solved,
        };
        console.close().await?;
        Ok(report)
    }
}

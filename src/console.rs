use anyhow::{Context, Result};
use log::debug;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines, Stdin, Stdout,
};

/// Line based channel the game talks to the player through.
pub struct Console<R, W> {
    lines: Lines<R>,
    output: W,
    requests: usize,
}

impl Console<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            lines: input.lines(),
            output,
            requests: 0,
        }
    }

    pub async fn say(&mut self, line: &str) -> Result<()> {
        self.output
            .write_all(format!("{line}\n").as_bytes())
            .await
            .context("Unable to write to console")
    }

    /// Writes `prompt` and waits for one line. `None` once the input is exhausted.
    pub async fn question(&mut self, prompt: &str) -> Result<Option<String>> {
        self.output
            .write_all(prompt.as_bytes())
            .await
            .context("Unable to write prompt")?;
        self.output.flush().await.context("Unable to flush prompt")?;
        self.requests += 1;
        self.lines
            .next_line()
            .await
            .context("Unable to read from console")
    }

    pub fn requests(&self) -> usize {
        self.requests
    }

    pub async fn close(mut self) -> Result<()> {
        self.output.flush().await.context("Unable to flush console")?;
        debug!("Console closed after {} input requests", self.requests);
        Ok(())
    }
}

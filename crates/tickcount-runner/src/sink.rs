//! Progress output sinks.

use async_trait::async_trait;
use tokio::io::{AsyncWriteExt, Stdout};

use tickcount_core::error::{Result, TickerError};
use tickcount_core::Progress;

/// Destination for progress lines. One `emit` per tick.
#[async_trait]
pub trait ProgressSink: Send {
    async fn emit(&mut self, progress: &Progress) -> Result<()>;
}

/// Writes one line per progress to stdout, flushing each line.
pub struct StdoutSink {
    out: Stdout,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self {
            out: tokio::io::stdout(),
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProgressSink for StdoutSink {
    async fn emit(&mut self, progress: &Progress) -> Result<()> {
        let line = format!("{progress}\n");
        self.out
            .write_all(line.as_bytes())
            .await
            .map_err(|e| TickerError::Output(format!("stdout write failed: {e}")))?;
        self.out
            .flush()
            .await
            .map_err(|e| TickerError::Output(format!("stdout flush failed: {e}")))
    }
}

/// Keeps rendered lines in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

#[async_trait]
impl ProgressSink for MemorySink {
    async fn emit(&mut self, progress: &Progress) -> Result<()> {
        self.lines.push(progress.to_string());
        Ok(())
    }
}

//! JSON-lines submitter.
//!
//! Appends one `{"market_id", "outcome", "reasoning"}` object per line. The
//! chain-side relay tails this file and sends the settlement transaction.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::domain::{MarketId, ResolutionResult};
use crate::error::Result;
use crate::port::outbound::submitter::ResolutionSubmitter;

#[derive(Serialize)]
struct Record<'a> {
    market_id: &'a MarketId,
    outcome: &'a str,
    reasoning: &'a str,
}

/// Appends resolutions to a JSON-lines file.
pub struct JsonlSubmitter {
    path: PathBuf,
    file: Mutex<File>,
}

impl JsonlSubmitter {
    /// Open `path` for appending, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ResolutionSubmitter for JsonlSubmitter {
    fn name(&self) -> &'static str {
        "jsonl"
    }

    async fn submit(&self, market_id: &MarketId, result: &ResolutionResult) -> Result<()> {
        let mut line = serde_json::to_string(&Record {
            market_id,
            outcome: &result.outcome,
            reasoning: &result.reasoning,
        })?;
        line.push('\n');

        let mut file = self.file.lock().await;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

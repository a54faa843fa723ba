//! JSON-lines market event source.
//!
//! Reads one [`MarketEvent`] object per line from a file or stdin. The
//! chain listener writes these lines as it observes "market ready for
//! resolution" events. Blank lines and `#` comments are ignored; malformed
//! lines are logged and skipped.

use std::path::Path;

use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, BufReader, Split, Stdin};
use tracing::warn;

use crate::domain::MarketEvent;
use crate::error::Result;
use crate::port::inbound::event::MarketEventSource;

/// Market events decoded line by line from a buffered reader.
pub struct JsonlEventSource<R> {
    lines: Split<R>,
    line_number: u64,
}

impl<R: AsyncBufRead + Unpin + Send> JsonlEventSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.split(b'\n'),
            line_number: 0,
        }
    }
}

impl JsonlEventSource<BufReader<File>> {
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path).await?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl JsonlEventSource<BufReader<Stdin>> {
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()))
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> MarketEventSource for JsonlEventSource<R> {
    fn name(&self) -> &'static str {
        "jsonl"
    }

    async fn next_event(&mut self) -> Result<Option<MarketEvent>> {
        while let Some(raw) = self.lines.next_segment().await? {
            self.line_number += 1;
            let Ok(line) = String::from_utf8(raw) else {
                warn!(line = self.line_number, "Skipping market event that is not UTF-8");
                continue;
            };
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match serde_json::from_str::<MarketEvent>(line) {
                Ok(event) => return Ok(Some(event)),
                Err(e) => warn!(
                    line = self.line_number,
                    error = %e,
                    "Skipping malformed market event"
                ),
            }
        }
        Ok(None)
    }
}

//! Market event source port.

use async_trait::async_trait;

use crate::domain::MarketEvent;
use crate::error::Result;

/// Stream of markets that are ready to be resolved.
///
/// Events are consumed one at a time; the listener never asks for the next
/// event until the previous pipeline run has finished.
#[async_trait]
pub trait MarketEventSource: Send {
    /// Return the source name for logging.
    fn name(&self) -> &'static str;

    /// Wait for the next event.
    ///
    /// Returns `Ok(None)` once the source is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying transport fails. The supervisor
    /// treats this as a listener crash and restarts with backoff.
    async fn next_event(&mut self) -> Result<Option<MarketEvent>>;
}

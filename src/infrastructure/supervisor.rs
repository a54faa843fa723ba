//! Listener restarts with exponential backoff.
//!
//! The listener only returns an error when its event source fails. The
//! supervisor restarts it against the same source after a jittered delay and
//! gives up once too many consecutive runs fail without making progress.

use std::time::Duration;

use rand::Rng;
use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::application::listener::{shutdown_requested, Listener, ListenerExit};
use crate::error::Result;
use crate::infrastructure::config::supervisor::SupervisorConfig;
use crate::port::inbound::event::MarketEventSource;

/// Restarts a [`Listener`] until shutdown, exhaustion, or the failure budget runs out.
pub struct Supervisor {
    config: SupervisorConfig,
    consecutive_failures: u32,
    current_delay_ms: u64,
    restarts: u32,
}

impl Supervisor {
    #[must_use]
    pub fn new(config: SupervisorConfig) -> Self {
        let current_delay_ms = config.initial_delay_ms;
        Self {
            config,
            consecutive_failures: 0,
            current_delay_ms,
            restarts: 0,
        }
    }

    /// Number of times the listener has been restarted.
    #[must_use]
    pub const fn restarts(&self) -> u32 {
        self.restarts
    }

    #[must_use]
    pub const fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    /// Drive the listener to completion.
    ///
    /// # Errors
    ///
    /// Returns the last source error once `max_consecutive_failures` runs
    /// in a row have failed without receiving an event.
    pub async fn run(
        &mut self,
        listener: &mut Listener,
        source: &mut dyn MarketEventSource,
        shutdown: &mut watch::Receiver<bool>,
    ) -> Result<ListenerExit> {
        loop {
            let received_before = listener.stats().received;

            let err = match listener.run(source, shutdown).await {
                Ok(exit) => return Ok(exit),
                Err(e) => e,
            };

            if listener.stats().received > received_before {
                self.reset_backoff();
            }
            self.record_failure();

            if self.consecutive_failures >= self.config.max_consecutive_failures {
                error!(
                    failures = self.consecutive_failures,
                    error = %err,
                    "Listener failed too many times, giving up"
                );
                return Err(err);
            }

            let delay = self.next_delay();
            warn!(
                error = %err,
                attempt = self.consecutive_failures,
                delay_ms = delay.as_millis() as u64,
                "Listener failed, restarting after backoff"
            );

            tokio::select! {
                biased;
                () = shutdown_requested(shutdown) => {
                    info!("Shutdown signal received during backoff");
                    return Ok(ListenerExit::Shutdown);
                }
                () = tokio::time::sleep(delay) => {}
            }
            self.restarts += 1;
        }
    }

    fn reset_backoff(&mut self) {
        self.consecutive_failures = 0;
        self.current_delay_ms = self.config.initial_delay_ms;
    }

    fn record_failure(&mut self) {
        self.consecutive_failures += 1;
    }

    /// Current delay plus up to 20% jitter; advances the delay for next time.
    fn next_delay(&mut self) -> Duration {
        let base = self.current_delay_ms;
        let jitter_range = base / 5;
        let jitter = if jitter_range == 0 {
            0
        } else {
            rand::thread_rng().gen_range(0..=jitter_range)
        };

        let next = (self.current_delay_ms as f64 * self.config.backoff_multiplier) as u64;
        self.current_delay_ms = next.min(self.config.max_delay_ms);

        Duration::from_millis(base.saturating_add(jitter))
    }
}

//! Mock chain-side collaborators: event source and resolution submitter.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{MarketEvent, MarketId, ResolutionResult};
use crate::error::{Error, Result};
use crate::port::inbound::event::MarketEventSource;
use crate::port::outbound::submitter::ResolutionSubmitter;

/// A "Will Arsenal beat Chelsea?" Yes/No market with the given window.
pub fn event(market_id: &str, bet_deadline: i64, resolution_deadline: i64) -> MarketEvent {
    MarketEvent {
        market_id: MarketId::from(market_id),
        title: "Will Arsenal beat Chelsea?".to_string(),
        description: None,
        outcomes: vec!["Yes".to_string(), "No".to_string()],
        bet_deadline,
        resolution_deadline,
    }
}

/// Serves a fixed list of events, then either ends or fails.
pub struct VecEventSource {
    events: VecDeque<MarketEvent>,
    fail_when_empty: bool,
}

impl VecEventSource {
    pub fn new(events: Vec<MarketEvent>) -> Self {
        Self {
            events: events.into(),
            fail_when_empty: false,
        }
    }

    /// Return a transport error instead of `None` once drained.
    pub fn then_fail(mut self) -> Self {
        self.fail_when_empty = true;
        self
    }

    /// Queue more events, e.g. between supervisor restarts.
    pub fn push(&mut self, event: MarketEvent) {
        self.events.push_back(event);
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

#[async_trait]
impl MarketEventSource for VecEventSource {
    fn name(&self) -> &'static str {
        "vec"
    }

    async fn next_event(&mut self) -> Result<Option<MarketEvent>> {
        match self.events.pop_front() {
            Some(event) => Ok(Some(event)),
            None if self.fail_when_empty => Err(Error::Connection("event feed dropped".into())),
            None => Ok(None),
        }
    }
}

/// Records every submission; optionally fails each one.
#[derive(Default)]
pub struct RecordingSubmitter {
    submissions: Mutex<Vec<(MarketId, ResolutionResult)>>,
    fail: bool,
}

impl RecordingSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn submissions(&self) -> Vec<(MarketId, ResolutionResult)> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResolutionSubmitter for RecordingSubmitter {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn submit(&self, market_id: &MarketId, result: &ResolutionResult) -> Result<()> {
        if self.fail {
            return Err(Error::Connection("relay unavailable".into()));
        }
        self.submissions
            .lock()
            .unwrap()
            .push((market_id.clone(), result.clone()));
        Ok(())
    }
}

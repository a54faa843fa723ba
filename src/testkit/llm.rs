//! Mock LLM clients.
//!
//! - [`MockLlm`]: Same response for every prompt.
//! - [`ScriptedLlm`]: Pops one response per call, in order; records prompts.
//! - [`FailingLlm`]: Every call fails with a connection error.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::port::outbound::llm::Llm;

pub struct MockLlm {
    response: String,
}

impl MockLlm {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

#[async_trait]
impl Llm for MockLlm {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn complete(&self, _prompt: &str) -> Result<String> {
        Ok(self.response.clone())
    }
}

/// Returns queued responses in order. Fails once the queue is empty.
pub struct ScriptedLlm {
    responses: Mutex<VecDeque<String>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedLlm {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle to every prompt received so far.
    pub fn prompts(&self) -> Arc<Mutex<Vec<String>>> {
        self.prompts.clone()
    }

    pub fn remaining(&self) -> usize {
        self.responses.lock().unwrap().len()
    }
}

#[async_trait]
impl Llm for ScriptedLlm {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Error::Connection("script exhausted".into()))
    }
}

pub struct FailingLlm {
    message: String,
}

impl FailingLlm {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl Llm for FailingLlm {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn complete(&self, _prompt: &str) -> Result<String> {
        Err(Error::Connection(self.message.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_llm_returns_response() {
        let llm = MockLlm::new(r#"{"outcome": "Yes"}"#);
        assert_eq!(llm.complete("test").await.unwrap(), r#"{"outcome": "Yes"}"#);
    }

    #[tokio::test]
    async fn scripted_llm_pops_in_order_then_fails() {
        let llm = ScriptedLlm::new(["a", "b"]);
        assert_eq!(llm.complete("p1").await.unwrap(), "a");
        assert_eq!(llm.complete("p2").await.unwrap(), "b");
        assert!(llm.complete("p3").await.is_err());
        assert_eq!(*llm.prompts().lock().unwrap(), vec!["p1", "p2", "p3"]);
    }
}

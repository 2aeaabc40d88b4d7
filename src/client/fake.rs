//! Deterministic backend double for tests and offline runs.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use super::{AiClient, AiError};
use crate::types::{ClientOptions, Translation};

#[derive(Debug, Clone)]
enum Script {
    Reply(Vec<Translation>),
    Fail(String),
}

/// Backend double with a scripted outcome, a call counter, and optional
/// simulated latency checked against the configured timeout.
///
/// Lives in the tree rather than behind `cfg(test)` so integration tests and
/// host applications can exercise the full flow without credentials.
pub struct FakeAiClient {
    script: Script,
    delay: Option<Duration>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl FakeAiClient {
    /// Always reply with the given suggestions.
    pub fn replying(translations: Vec<Translation>) -> Self {
        Self {
            script: Script::Reply(translations),
            delay: None,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// Always fail with an `Api` error carrying the given cause.
    pub fn failing(cause: impl Into<String>) -> Self {
        Self {
            script: Script::Fail(cause.into()),
            delay: None,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// Take `delay` before replying. A delay past the configured timeout
    /// makes the call fail with `Timeout`, like a real backend would.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of `translate` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The prompt from the most recent call, if any.
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiClient for FakeAiClient {
    async fn translate(
        &self,
        prompt: &str,
        options: &ClientOptions,
    ) -> Result<Vec<Translation>, AiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());

        if let Some(delay) = self.delay {
            if delay > options.timeout {
                tokio::time::sleep(options.timeout).await;
                return Err(AiError::Timeout {
                    millis: options.timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(delay).await;
        }

        match &self.script {
            Script::Reply(translations) => Ok(translations.clone()),
            Script::Fail(cause) => Err(AiError::Api(cause.clone())),
        }
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

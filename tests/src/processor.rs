use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use trevor_kernel::{ProcessError, ProcessRequest, Processed, Processor, SessionStore};

use crate::session::MockSessionStore;

/// What the mock does when called.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Succeed(Processed),
    Fail(String),
    Panic,
}

/// A mock processor with a scripted outcome.
///
/// Clones share state, so a test can keep one handle for assertions and give
/// another to the gateway.  Every call is recorded with the request exactly as
/// the gateway handed it over (before any token rotation).
#[derive(Clone)]
pub struct MockProcessor {
    outcome: Arc<RwLock<MockOutcome>>,
    /// Track all requests passed to this processor
    pub call_history: Arc<RwLock<Vec<ProcessRequest>>>,
    rotate_to: Option<String>,
    delay: Option<Duration>,
    session: Option<Arc<MockSessionStore>>,
    scheduled: Arc<AtomicUsize>,
    completed: Arc<AtomicUsize>,
}

impl MockProcessor {
    /// Succeeds with `("mock", null)` until told otherwise.
    pub fn new() -> Self {
        Self {
            outcome: Arc::new(RwLock::new(MockOutcome::Succeed(Processed::new(
                "mock",
                Value::Null,
            )))),
            call_history: Arc::new(RwLock::new(Vec::new())),
            rotate_to: None,
            delay: None,
            session: None,
            scheduled: Arc::new(AtomicUsize::new(0)),
            completed: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Succeed with the given type and payload.
    pub fn succeeding(kind: &str, data: Value) -> Self {
        let mock = Self::new();
        mock.set_outcome(MockOutcome::Succeed(Processed::new(kind, data)));
        mock
    }

    /// Fail with the given message.
    pub fn failing(message: &str) -> Self {
        let mock = Self::new();
        mock.set_outcome(MockOutcome::Fail(message.to_string()));
        mock
    }

    /// Expose a session store relaying tokens through `header`.
    pub fn with_session_header(mut self, header: &str) -> Self {
        self.session = Some(Arc::new(MockSessionStore::new(header)));
        self
    }

    /// Replace the request token with `token` on success.
    pub fn rotating_token(mut self, token: &str) -> Self {
        self.rotate_to = Some(token.to_string());
        self
    }

    /// Sleep before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn set_outcome(&self, outcome: MockOutcome) {
        *self.outcome.write() = outcome;
    }

    /// Retrieve the history of calls made to this processor
    pub fn history(&self) -> Vec<ProcessRequest> {
        self.call_history.read().clone()
    }

    /// Check the total number of times this processor was invoked
    pub fn call_count(&self) -> usize {
        self.call_history.read().len()
    }

    /// How many times the gateway scheduled background tasks.
    pub fn scheduled_count(&self) -> usize {
        self.scheduled.load(Ordering::SeqCst)
    }

    /// Calls that ran past their delay, whatever the outcome.
    pub fn completed_count(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

impl Default for MockProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Processor for MockProcessor {
    async fn process(&self, request: &mut ProcessRequest) -> Result<Processed, ProcessError> {
        self.call_history.write().push(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.completed.fetch_add(1, Ordering::SeqCst);

        let outcome = self.outcome.read().clone();
        match outcome {
            MockOutcome::Succeed(output) => {
                if let Some(token) = &self.rotate_to {
                    request.set_token(token.clone());
                }
                Ok(output)
            }
            MockOutcome::Fail(message) => Err(ProcessError::rejected(message)),
            MockOutcome::Panic => panic!("mock processor panicked"),
        }
    }

    fn session_store(&self) -> Option<&dyn SessionStore> {
        self.session.as_deref().map(|s| s as &dyn SessionStore)
    }

    fn schedule_background_tasks(&self) {
        self.scheduled.fetch_add(1, Ordering::SeqCst);
    }
}

#[macro_export]
macro_rules! assert_processed {
    ($processor:expr, $expected_count:expr) => {
        let count = $processor.call_count();
        assert_eq!(
            count, $expected_count,
            "Expected processor to be called {} times, but was called {} times",
            $expected_count, count
        );
    };
}

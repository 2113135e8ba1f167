//! Echo backend.
//!
//! Returns the input text unchanged under the `echo` type.  With a session
//! store attached it also keeps a per-token turn counter, minting a token for
//! first-time or unknown clients.  The scheduled background task evicts
//! sessions that have been idle longer than the configured TTL.

use super::memory::InMemorySessionStore;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use trevor_kernel::{ProcessError, ProcessRequest, Processed, Processor, SessionStore};

const DEFAULT_REPORT_INTERVAL: Duration = Duration::from_secs(60);
const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(30 * 60);

pub struct EchoProcessor {
    sessions: Option<Arc<InMemorySessionStore>>,
    report_interval: Duration,
    idle_ttl: Duration,
}

impl EchoProcessor {
    /// Stateless echo, no session header.
    pub fn new() -> Self {
        Self {
            sessions: None,
            report_interval: DEFAULT_REPORT_INTERVAL,
            idle_ttl: DEFAULT_IDLE_TTL,
        }
    }

    /// Echo with session continuity through `store`.
    pub fn with_sessions(mut self, store: Arc<InMemorySessionStore>) -> Self {
        self.sessions = Some(store);
        self
    }

    /// How often the background task evicts idle sessions and logs the count.
    pub fn with_report_interval(mut self, interval: Duration) -> Self {
        self.report_interval = interval;
        self
    }

    /// Sessions unused for this long are evicted on the next tick.
    pub fn with_idle_ttl(mut self, ttl: Duration) -> Self {
        self.idle_ttl = ttl;
        self
    }
}

impl Default for EchoProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Processor for EchoProcessor {
    async fn process(&self, request: &mut ProcessRequest) -> Result<Processed, ProcessError> {
        let Some(sessions) = &self.sessions else {
            return Ok(Processed::new("echo", json!({ "text": request.text() })));
        };

        let turn = match sessions.touch(request.token()) {
            Some(turn) => turn,
            None => {
                request.set_token(sessions.open());
                1
            }
        };

        Ok(Processed::new(
            "echo",
            json!({ "text": request.text(), "turn": turn }),
        ))
    }

    fn session_store(&self) -> Option<&dyn SessionStore> {
        self.sessions.as_deref().map(|s| s as &dyn SessionStore)
    }

    fn schedule_background_tasks(&self) {
        let Some(sessions) = self.sessions.clone() else {
            return;
        };
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("no tokio runtime; session report task not scheduled");
            return;
        };

        let period = self.report_interval;
        let ttl = self.idle_ttl;
        if period.is_zero() {
            warn!("session report interval is zero; task not scheduled");
            return;
        }
        runtime.spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let evicted = sessions.evict_idle(ttl);
                info!(sessions = sessions.len(), evicted, "session report");
            }
        });
    }
}

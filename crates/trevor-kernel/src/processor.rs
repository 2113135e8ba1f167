//! Processor contract.
//!
//! A [`Processor`] turns validated text into a typed, structured result.  The
//! gateway calls [`Processor::process`] exactly once per accepted request and
//! never retries.

use crate::error::ProcessError;
use crate::session::SessionStore;
use crate::types::{ProcessRequest, Processed};
use async_trait::async_trait;

/// Pluggable text-processing backend.
///
/// Implementations must be `Send + Sync` so a single instance can be shared
/// across Tokio tasks.  Services, plugins and middleware are the
/// implementation's own business: hand them over when constructing it.
#[async_trait]
pub trait Processor: Send + Sync {
    /// Process one request.
    ///
    /// The request is borrowed mutably so the processor can rotate the session
    /// token; the gateway echoes the final token on success.  The returned
    /// error's display text is sent to the client as-is.
    async fn process(&self, request: &mut ProcessRequest) -> Result<Processed, ProcessError>;

    /// Optional session store.  `None` disables token relaying entirely.
    fn session_store(&self) -> Option<&dyn SessionStore> {
        None
    }

    /// Start recurring background work.
    ///
    /// Called exactly once by the gateway before it starts accepting
    /// connections.  A Tokio runtime is available, so implementations may
    /// `tokio::spawn` their loops here.
    fn schedule_background_tasks(&self) {}
}

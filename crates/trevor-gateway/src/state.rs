//! Shared application state for the process route

use crate::cors::CorsNegotiator;
use crate::error::{ServerError, ServerResult};
use crate::session::TokenBridge;
use std::sync::Arc;
use trevor_kernel::{ConfigError, GatewayConfig, Processor};

/// State shared across all request handlers.
///
/// Built once when the router is assembled and never mutated afterwards, so
/// handlers need no locks.
#[derive(Clone)]
pub struct AppState {
    /// Backend invoked once per accepted request.
    pub processor: Arc<dyn Processor>,
    /// Present only when the processor exposes a session store.
    pub tokens: Option<TokenBridge>,
    pub cors: CorsNegotiator,
    pub input_field: Arc<str>,
    /// Fixed message for a missing or blank input field.
    pub mandatory_message: Arc<str>,
    pub max_body_bytes: usize,
}

impl AppState {
    /// Create a new `AppState` from a validated config and a processor.
    pub fn new(config: &GatewayConfig, processor: Arc<dyn Processor>) -> ServerResult<Self> {
        let origin = config.cors_origin_value();
        let cors = CorsNegotiator::new(origin)
            .map_err(|_| ConfigError::InvalidCorsOrigin(origin.to_string()))?;

        let tokens = match processor.session_store() {
            Some(store) => Some(
                TokenBridge::from_store(store)
                    .map_err(|_| ServerError::InvalidTokenHeader(store.token_header().to_string()))?,
            ),
            None => None,
        };

        Ok(Self {
            tokens,
            cors,
            input_field: Arc::from(config.input_field_name()),
            mandatory_message: Arc::from(config.mandatory_field_message()),
            max_body_bytes: config.max_body_bytes,
            processor,
        })
    }
}

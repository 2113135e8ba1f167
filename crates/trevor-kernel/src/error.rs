//! Error types for `trevor-kernel`.
//!
//! [`ConfigError`] covers every failure that can be detected when a
//! [`GatewayConfig`](crate::GatewayConfig) is validated, before any socket is
//! bound.  [`ProcessError`] is what a [`Processor`](crate::Processor) returns;
//! its display text is sent verbatim to the client.

use thiserror::Error;

/// Configuration error detected by [`GatewayConfig::validate()`](crate::GatewayConfig::validate).
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    // ── Route ────────────────────────────────────────────────────────────────
    /// The route name contains whitespace or path-template characters.
    #[error("route name '{0}' is not a literal url path")]
    InvalidRoute(String),

    // ── CORS ─────────────────────────────────────────────────────────────────
    /// The CORS origin cannot be sent as an HTTP header value.
    #[error("cors origin '{0}' is not a valid header value")]
    InvalidCorsOrigin(String),

    // ── Listener ─────────────────────────────────────────────────────────────
    /// The listener port is 0.
    #[error("port must be greater than 0")]
    InvalidPort,

    /// `max_body_bytes` is zero, which would reject every request body.
    #[error("request body limit must be greater than 0 bytes")]
    InvalidBodyLimit,

    // ── TLS ──────────────────────────────────────────────────────────────────
    /// TLS is enabled but a certificate or key path is missing.
    #[error("tls is enabled but the {0} path is empty")]
    MissingTlsPath(&'static str),
}

/// Failure reported by a [`Processor`](crate::Processor).
///
/// The gateway never inspects the variant; it only renders the message into
/// the failure envelope.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProcessError {
    /// The processor understood the request and declined it.
    #[error("{0}")]
    Rejected(String),

    /// A downstream dependency of the processor failed.
    #[error(transparent)]
    Backend(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ProcessError {
    /// Shorthand for [`ProcessError::Rejected`].
    pub fn rejected(message: impl Into<String>) -> Self {
        ProcessError::Rejected(message.into())
    }

    /// Wrap any error raised by a processor dependency.
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ProcessError::Backend(Box::new(err))
    }
}

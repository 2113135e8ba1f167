//! Gateway startup and runtime errors.
//!
//! Request-level failures never reach this type: they are rendered into the
//! failure [`Envelope`](crate::envelope::Envelope).  [`ServerError`] covers
//! what can go wrong while loading settings, building the router and serving.

use thiserror::Error;
use trevor_kernel::ConfigError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid gateway config: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to load settings: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("unsupported settings format: {0}")]
    UnsupportedFormat(String),

    #[error("session token header '{0}' is not a valid header name")]
    InvalidTokenHeader(String),

    #[error("could not resolve bind address '{0}'")]
    UnresolvedAddress(String),

    #[error("failed to load tls certificate or key: {0}")]
    Tls(#[source] std::io::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ServerResult<T> = Result<T, ServerError>;

//! Session token bridge.
//!
//! Relays the opaque session token between a transport header and the
//! [`ProcessRequest`](trevor_kernel::ProcessRequest).  Only built when the
//! processor exposes a [`SessionStore`]; without one the gateway never reads
//! or writes a token header.

use axum::http::{HeaderMap, HeaderName, HeaderValue, header::InvalidHeaderName};
use tracing::warn;
use trevor_kernel::SessionStore;

#[derive(Debug, Clone)]
pub struct TokenBridge {
    header: HeaderName,
}

impl TokenBridge {
    /// Parse the store's header name once, at router construction.
    pub fn from_store(store: &dyn SessionStore) -> Result<Self, InvalidHeaderName> {
        Self::new(store.token_header())
    }

    pub fn new(header: &str) -> Result<Self, InvalidHeaderName> {
        Ok(Self {
            header: HeaderName::from_bytes(header.trim().as_bytes())?,
        })
    }

    pub fn header_name(&self) -> &HeaderName {
        &self.header
    }

    /// Inbound token, or an empty string when the header is absent or not
    /// valid UTF-8.
    pub fn read(&self, headers: &HeaderMap) -> String {
        headers
            .get(&self.header)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    /// Write `token` back under the same header name.
    pub fn write(&self, token: &str, headers: &mut HeaderMap) {
        match HeaderValue::from_str(token) {
            Ok(value) => {
                headers.insert(self.header.clone(), value);
            }
            Err(_) => warn!(
                header = %self.header,
                "session token is not a valid header value; not written"
            ),
        }
    }
}

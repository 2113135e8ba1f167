//! Session store contract.
//!
//! The gateway only relays an opaque token between a transport header and the
//! [`ProcessRequest`](crate::ProcessRequest).  Token generation, validation,
//! expiry and storage all live behind this trait in the backend.

/// A session store as seen by the gateway.
///
/// Implementations must be `Send + Sync`; one instance is shared by every
/// request-handling task.
pub trait SessionStore: Send + Sync {
    /// Name of the HTTP header the token is read from and written back to.
    fn token_header(&self) -> &str;
}

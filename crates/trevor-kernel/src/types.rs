//! Core data types exchanged between the gateway and a processor.
//!
//! These types carry no runtime dependencies beyond `serde` and `std`, so
//! processor crates can implement [`Processor`](crate::Processor) without
//! pulling in the HTTP stack.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

// ─────────────────────────────────────────────────────────────────────────────
// ProcessRequest
// ─────────────────────────────────────────────────────────────────────────────

/// A validated inbound request handed to a [`Processor`](crate::Processor).
///
/// Only the session token is mutable after construction: a processor may
/// rotate it, and the gateway writes back whatever value the request carries
/// once processing succeeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessRequest {
    id: String,
    method: String,
    path: String,
    text: String,
    token: String,
    headers: HashMap<String, String>,
}

impl ProcessRequest {
    /// Construct a `POST` request.  `text` is trimmed; callers are expected to
    /// have rejected blank input already.
    pub fn new(id: impl Into<String>, path: impl Into<String>, text: &str) -> Self {
        Self {
            id: id.into(),
            method: "POST".to_string(),
            path: path.into(),
            text: text.trim().to_string(),
            token: String::new(),
            headers: HashMap::new(),
        }
    }

    /// Builder helper: set the HTTP method.
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Builder helper: attach a transport header (name is lowercased).
    /// Repeated names are joined with `, ` in arrival order.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        self.headers
            .entry(key.into().to_lowercase())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert_with(|| value.clone());
        self
    }

    /// Builder helper: set the inbound session token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Correlation id for logs.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// HTTP method, e.g. `POST`.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Request path, e.g. `/process`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The trimmed, non-empty input text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Session token; empty when absent or when no session store is configured.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Replace the session token, e.g. to mint or rotate a session.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = token.into();
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }

    /// All transport headers, names lowercased.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Processed
// ─────────────────────────────────────────────────────────────────────────────

/// Successful processor output: a type discriminator plus an arbitrary payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Processed {
    /// Processor-defined discriminator, rendered as `type` on the wire.
    pub kind: String,
    /// Arbitrary JSON payload.
    pub data: Value,
}

impl Processed {
    pub fn new(kind: impl Into<String>, data: Value) -> Self {
        Self {
            kind: kind.into(),
            data,
        }
    }

    /// Build from any serializable payload.
    pub fn from_serializable<T: Serialize>(
        kind: impl Into<String>,
        data: &T,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self::new(kind, serde_json::to_value(data)?))
    }
}

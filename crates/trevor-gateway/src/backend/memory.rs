//! In-memory [`SessionStore`] implementation.

use dashmap::DashMap;
use std::time::Duration;
use tokio::time::Instant;
use trevor_kernel::SessionStore;
use uuid::Uuid;

/// Per-token state: turns taken and when the token was last used.
struct Session {
    turns: u64,
    last_seen: Instant,
}

/// [`SessionStore`] backed by a `DashMap` of token → session.
///
/// Suitable for single-node deployments; sessions are lost on restart.  Idle
/// sessions stay in the map until [`evict_idle`](Self::evict_idle) runs.
pub struct InMemorySessionStore {
    header: String,
    sessions: DashMap<String, Session>,
}

impl InMemorySessionStore {
    /// Create an empty store relaying tokens through `header`.
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            sessions: DashMap::new(),
        }
    }

    /// Record a turn for a known token and return the new turn number.
    /// Unknown tokens return `None`.
    pub fn touch(&self, token: &str) -> Option<u64> {
        let mut session = self.sessions.get_mut(token)?;
        session.turns += 1;
        session.last_seen = Instant::now();
        Some(session.turns)
    }

    /// Mint a new session whose first turn is already recorded.
    pub fn open(&self) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions.insert(
            token.clone(),
            Session {
                turns: 1,
                last_seen: Instant::now(),
            },
        );
        token
    }

    /// Drop sessions unused for at least `ttl`; returns how many were removed.
    pub fn evict_idle(&self, ttl: Duration) -> usize {
        let before = self.sessions.len();
        let now = Instant::now();
        self.sessions
            .retain(|_, session| now.duration_since(session.last_seen) < ttl);
        before.saturating_sub(self.sessions.len())
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionStore for InMemorySessionStore {
    fn token_header(&self) -> &str {
        &self.header
    }
}

use trevor_kernel::SessionStore;

/// A session store that only names its token header.
#[derive(Debug, Clone)]
pub struct MockSessionStore {
    header: String,
}

impl MockSessionStore {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
        }
    }
}

impl SessionStore for MockSessionStore {
    fn token_header(&self) -> &str {
        &self.header
    }
}

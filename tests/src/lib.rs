//! Trevor Testing Framework
//!
//! Provides test doubles for gateway tests that need a processor or session
//! store without a real backend.

pub mod processor;
pub mod session;

pub use processor::MockProcessor;
pub use session::MockSessionStore;

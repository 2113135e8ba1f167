//! `trevor-gateway` — single-route HTTP gateway runtime.
//!
//! Accepts freeform text on one configurable route, hands it to a
//! [`Processor`](trevor_kernel::Processor) and returns a uniform JSON envelope.
//!
//! | Component | Module |
//! |-----------|--------|
//! | Envelope codec | [`envelope`] |
//! | CORS negotiator | [`cors`] |
//! | Session token bridge | [`session`] |
//! | Request gateway | [`handlers::process`], [`server::GatewayServer`] |
//! | Settings loader | [`settings`] |
//! | Demo backend | [`backend::EchoProcessor`], [`backend::InMemorySessionStore`] |
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use trevor_gateway::backend::EchoProcessor;
//! use trevor_gateway::server::GatewayServer;
//! use trevor_kernel::GatewayConfig;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = GatewayConfig::new().with_bind("127.0.0.1", 8080);
//!     let server = GatewayServer::new(config, Arc::new(EchoProcessor::new()));
//!     server.start().await.unwrap();
//! }
//! ```

pub mod backend;
pub mod cors;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod server;
pub mod session;
pub mod settings;
pub mod state;

// Re-export the kernel contracts for convenience.
pub use trevor_kernel as kernel;

//! `trevor-kernel` — contracts for the Trevor text gateway.
//!
//! This crate defines the *trait interfaces and configuration types* shared by
//! the gateway runtime and processor backends.  No HTTP code lives here; the
//! axum runtime belongs in `trevor-gateway`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              trevor-kernel  (this crate)                    │
//! │  Processor trait        SessionStore trait                  │
//! │  ProcessRequest / Processed / ProcessError                  │
//! │  GatewayConfig + validate()   ConfigError                   │
//! └──────────────────────────┬──────────────────────────────────┘
//!                            │  depends on
//! ┌──────────────────────────▼──────────────────────────────────┐
//! │              trevor-gateway  (runtime crate)                │
//! │  envelope codec · CORS · token bridge · process handler     │
//! │  GatewayServer (axum, optional TLS)                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use async_trait::async_trait;
//! use serde_json::json;
//! use trevor_kernel::{ProcessError, ProcessRequest, Processed, Processor};
//!
//! struct Shout;
//!
//! #[async_trait]
//! impl Processor for Shout {
//!     async fn process(&self, request: &mut ProcessRequest) -> Result<Processed, ProcessError> {
//!         Ok(Processed::new("shout", json!({ "text": request.text().to_uppercase() })))
//!     }
//! }
//! ```

pub mod config;
pub mod error;
pub mod processor;
pub mod session;
pub mod types;

pub use config::{GatewayConfig, TlsConfig};
pub use error::{ConfigError, ProcessError};
pub use processor::Processor;
pub use session::SessionStore;
pub use types::{ProcessRequest, Processed};

//! Axum-based HTTP gateway server.
//!
//! [`GatewayServer`] wires the process handler, CORS negotiator and token
//! bridge into an axum service bound to a single route.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/{route}` | Validate input, run the processor, return an envelope. |
//! | `OPTIONS` | `/{route}` | CORS preflight. |
//! | other | any | `404 Not Found`, no body contract. |

use crate::error::{ServerError, ServerResult};
use crate::handlers::{not_found, preflight, process};
use crate::state::AppState;
use axum::{Router, routing::post};
use axum_server::{Handle, tls_rustls::RustlsConfig};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use trevor_kernel::{GatewayConfig, Processor};

/// How long in-flight requests get to finish after Ctrl-C on a TLS listener.
const TLS_SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

// ─────────────────────────────────────────────────────────────────────────────
// GatewayServer
// ─────────────────────────────────────────────────────────────────────────────

/// High-level gateway server owning the configuration and the processor.
pub struct GatewayServer {
    config: GatewayConfig,
    processor: Arc<dyn Processor>,
}

impl GatewayServer {
    /// Create a new server from the given configuration and backend.
    pub fn new(config: GatewayConfig, processor: Arc<dyn Processor>) -> Self {
        Self { config, processor }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Build the axum [`Router`].
    ///
    /// Validates the config and resolves the optional session store into a
    /// token bridge.  Call [`start()`](Self::start) to bind and serve.
    pub fn build_app(&self) -> ServerResult<Router> {
        self.config.validate()?;
        let state = AppState::new(&self.config, Arc::clone(&self.processor))?;
        let path = self.config.route_path();

        Ok(Router::new()
            .route(&path, post(process).options(preflight).fallback(not_found))
            .fallback(not_found)
            .with_state(state))
    }

    /// Schedule the processor's background tasks, bind `host:port` and serve
    /// until Ctrl-C.
    pub async fn start(self) -> ServerResult<()> {
        let app = self.build_app()?;
        let addr = self.config.bind_addr();

        // exactly once, before the listener accepts anything
        self.processor.schedule_background_tasks();

        if self.config.tls.enabled {
            let tls = &self.config.tls;
            let rustls = RustlsConfig::from_pem_file(&tls.cert_path, &tls.key_path)
                .await
                .map_err(ServerError::Tls)?;
            let socket = tokio::net::lookup_host(&addr)
                .await?
                .next()
                .ok_or_else(|| ServerError::UnresolvedAddress(addr.clone()))?;

            let handle = Handle::new();
            tokio::spawn({
                let handle = handle.clone();
                async move {
                    shutdown_signal().await;
                    handle.graceful_shutdown(Some(TLS_SHUTDOWN_GRACE));
                }
            });

            info!(
                addr  = %socket,
                route = %self.config.route_path(),
                tls   = true,
                "Trevor gateway starting"
            );
            axum_server::bind_rustls(socket, rustls)
                .handle(handle)
                .serve(app.into_make_service())
                .await?;
        } else {
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            info!(
                addr  = %addr,
                route = %self.config.route_path(),
                tls   = false,
                "Trevor gateway starting"
            );
            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }

        info!("Trevor gateway stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for Ctrl-C; shutdown signal disabled");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

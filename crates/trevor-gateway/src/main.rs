//! Trevor gateway — entry point.
//!
//! Loads settings (see [`trevor_gateway::settings`]) and serves the echo
//! backend on the configured route.
//!
//! # Environment variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `TREVOR_CONFIG` | *(none)* | Path to a toml/yaml/json settings file. |
//! | `TREVOR_SESSION_HEADER` | `X-Trevor-Token` | Session token header; empty disables sessions. |
//! | `TREVOR_LOG_FORMAT` | `text` | `json` for structured JSON logs. |
//! | `RUST_LOG` | `trevor_gateway=info` | Log filter. |

use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use trevor_gateway::backend::{EchoProcessor, InMemorySessionStore};
use trevor_gateway::server::GatewayServer;
use trevor_gateway::settings::{CONFIG_PATH_ENV, load_settings};

const DEFAULT_SESSION_HEADER: &str = "X-Trevor-Token";

#[tokio::main]
async fn main() {
    init_tracing();

    let config_path = std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from);
    let config = match load_settings(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Gateway error: {e}");
            std::process::exit(1);
        }
    };

    let session_header = std::env::var("TREVOR_SESSION_HEADER")
        .unwrap_or_else(|_| DEFAULT_SESSION_HEADER.to_string());

    let mut processor = EchoProcessor::new();
    if !session_header.trim().is_empty() {
        processor = processor.with_sessions(Arc::new(InMemorySessionStore::new(&session_header)));
    }

    info!(
        route = %config.route_path(),
        input_field = %config.input_field_name(),
        cors_origin = %config.cors_origin_value(),
        tls = config.tls.enabled,
        session_header = %session_header,
        "Trevor gateway configuration loaded"
    );

    let server = GatewayServer::new(config, Arc::new(processor));
    if let Err(e) = server.start().await {
        eprintln!("Gateway error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("trevor_gateway=info"));
    let json = std::env::var("TREVOR_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

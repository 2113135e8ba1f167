//! Gateway configuration and validation.
//!
//! [`GatewayConfig`] is read once at startup and never mutated afterwards.
//! Call [`validate()`](GatewayConfig::validate) before handing it to the
//! gateway runtime.  Empty strings for the route, input field, CORS origin and
//! host fall back to their defaults, so a partially filled config file behaves
//! like an unset one.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Route served when none is configured.
pub const DEFAULT_ROUTE: &str = "process";
/// JSON field read from the request body when none is configured.
pub const DEFAULT_INPUT_FIELD: &str = "text";
/// `Access-Control-Allow-Origin` value when none is configured.
pub const DEFAULT_CORS_ORIGIN: &str = "*";
/// Bind host when none is configured.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Same limit axum applies by default.
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

// ─────────────────────────────────────────────────────────────────────────────
// TlsConfig
// ─────────────────────────────────────────────────────────────────────────────

/// PEM certificate and key used when serving HTTPS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TlsConfig {
    pub enabled: bool,
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
}

impl TlsConfig {
    /// Enabled TLS config with the given certificate and key paths.
    pub fn new(cert_path: impl Into<PathBuf>, key_path: impl Into<PathBuf>) -> Self {
        Self {
            enabled: true,
            cert_path: cert_path.into(),
            key_path: key_path.into(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.enabled {
            return Ok(());
        }
        if self.cert_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingTlsPath("certificate"));
        }
        if self.key_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingTlsPath("key"));
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// GatewayConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level gateway configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Route name; the gateway serves `/<route>`.
    pub route: String,
    /// JSON field carrying the input text.
    pub input_field: String,
    /// `Access-Control-Allow-Origin` value.
    pub cors_origin: String,
    /// Bind host.
    pub host: String,
    /// Bind port (must be > 0).
    pub port: u16,
    /// HTTPS settings.
    pub tls: TlsConfig,
    /// Upper bound on the request body; larger bodies fail validation.
    pub max_body_bytes: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            route: DEFAULT_ROUTE.to_string(),
            input_field: DEFAULT_INPUT_FIELD.to_string(),
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: 8080,
            tls: TlsConfig::default(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl GatewayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the route name.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = route.into();
        self
    }

    /// Builder: set the input field name.
    pub fn with_input_field(mut self, field: impl Into<String>) -> Self {
        self.input_field = field.into();
        self
    }

    /// Builder: set the CORS origin.
    pub fn with_cors_origin(mut self, origin: impl Into<String>) -> Self {
        self.cors_origin = origin.into();
        self
    }

    /// Builder: set host and port.
    pub fn with_bind(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }

    /// Builder: enable TLS.
    pub fn with_tls(mut self, tls: TlsConfig) -> Self {
        self.tls = tls;
        self
    }

    /// Builder: set the request body limit.
    pub fn with_max_body_bytes(mut self, limit: usize) -> Self {
        self.max_body_bytes = limit;
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Resolved values
    // ─────────────────────────────────────────────────────────────────────────

    /// Route name without surrounding slashes, defaulting to `process`.
    pub fn route_name(&self) -> &str {
        non_empty(self.route.trim().trim_matches('/'), DEFAULT_ROUTE)
    }

    /// Absolute path served by the gateway, e.g. `/process`.
    pub fn route_path(&self) -> String {
        format!("/{}", self.route_name())
    }

    /// Input field name, defaulting to `text`.
    pub fn input_field_name(&self) -> &str {
        non_empty(self.input_field.trim(), DEFAULT_INPUT_FIELD)
    }

    /// CORS origin, defaulting to `*`.
    pub fn cors_origin_value(&self) -> &str {
        non_empty(self.cors_origin.trim(), DEFAULT_CORS_ORIGIN)
    }

    /// `host:port` string suitable for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", non_empty(self.host.trim(), DEFAULT_HOST), self.port)
    }

    /// Fixed failure message for a missing or blank input field.
    pub fn mandatory_field_message(&self) -> String {
        format!(
            "{} field is mandatory and can not be empty",
            self.input_field_name()
        )
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Validation
    // ─────────────────────────────────────────────────────────────────────────

    /// Validate all structural invariants of this configuration.
    ///
    /// Returns the *first* detected [`ConfigError`].  Checks performed:
    /// 1. The route is a literal path (no whitespace, no `{ } * ? # :`).
    /// 2. The CORS origin is a valid header value.
    /// 3. The port is non-zero.
    /// 4. The body limit is non-zero.
    /// 5. When TLS is enabled, both paths are set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let route = self.route_name();
        if route
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '{' | '}' | '*' | '?' | '#' | ':'))
        {
            return Err(ConfigError::InvalidRoute(route.to_string()));
        }

        let origin = self.cors_origin_value();
        if !origin.bytes().all(|b| b == b'\t' || (0x20..0x7f).contains(&b)) {
            return Err(ConfigError::InvalidCorsOrigin(origin.to_string()));
        }

        if self.port == 0 {
            return Err(ConfigError::InvalidPort);
        }

        if self.max_body_bytes == 0 {
            return Err(ConfigError::InvalidBodyLimit);
        }

        self.tls.validate()
    }
}

fn non_empty<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() { default } else { value }
}

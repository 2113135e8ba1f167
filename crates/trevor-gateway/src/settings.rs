//! Settings loader.
//!
//! Builds a [`GatewayConfig`] from, in increasing precedence: built-in
//! defaults, an optional settings file, and `TREVOR_*` environment variables.
//!
//! | Variable | Config key |
//! |----------|------------|
//! | `TREVOR_ROUTE` | `route` |
//! | `TREVOR_INPUT_FIELD` | `input_field` |
//! | `TREVOR_CORS_ORIGIN` | `cors_origin` |
//! | `TREVOR_HOST` / `TREVOR_PORT` | `host` / `port` |
//! | `TREVOR_MAX_BODY_BYTES` | `max_body_bytes` |
//! | `TREVOR_TLS__ENABLED` | `tls.enabled` |
//! | `TREVOR_TLS__CERT_PATH` / `TREVOR_TLS__KEY_PATH` | `tls.cert_path` / `tls.key_path` |

use crate::error::{ServerError, ServerResult};
use config::{Config, Environment, File, FileFormat};
use std::path::Path;
use trevor_kernel::GatewayConfig;

/// Environment variable naming the settings file.
pub const CONFIG_PATH_ENV: &str = "TREVOR_CONFIG";
/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "TREVOR";

/// Detect the settings format from the file extension.
pub fn detect_format(path: &Path) -> ServerResult<FileFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| ServerError::UnsupportedFormat(path.display().to_string()))?;

    match ext.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(FileFormat::Yaml),
        "toml" => Ok(FileFormat::Toml),
        "json" => Ok(FileFormat::Json),
        _ => Err(ServerError::UnsupportedFormat(ext.to_string())),
    }
}

/// The `TREVOR_*` environment source.
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Load settings from `path` (if any) and the process environment, then
/// validate them.
pub fn load_settings(path: Option<&Path>) -> ServerResult<GatewayConfig> {
    load_settings_with(path, environment())
}

/// Same as [`load_settings`] with an explicit environment source.
pub fn load_settings_with(path: Option<&Path>, env: Environment) -> ServerResult<GatewayConfig> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        let format = detect_format(path)?;
        builder = builder.add_source(File::new(&path.to_string_lossy(), format));
    }

    let config: GatewayConfig = builder.add_source(env).build()?.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

//! Cross-origin headers for the gateway route.
//!
//! `tower_http::cors::CorsLayer` cannot echo the requested headers verbatim
//! nor emit the singular `Access-Control-Allow-Method` header that existing
//! clients read, so the headers are written by hand.

use axum::http::{
    HeaderMap, HeaderName, HeaderValue,
    header::{
        ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
        ACCESS_CONTROL_REQUEST_HEADERS, InvalidHeaderValue,
    },
};

/// Methods accepted on the gateway route.
pub const ALLOWED_METHODS: &str = "OPTIONS,POST";

/// Non-standard singular spelling kept for wire compatibility.
pub const ALLOW_METHOD_LEGACY: &str = "access-control-allow-method";

/// Computes CORS headers for preflight and actual requests.  Stateless apart
/// from the configured origin.
#[derive(Debug, Clone)]
pub struct CorsNegotiator {
    origin: HeaderValue,
}

impl CorsNegotiator {
    pub fn new(origin: &str) -> Result<Self, InvalidHeaderValue> {
        Ok(Self {
            origin: HeaderValue::from_str(origin)?,
        })
    }

    pub fn origin(&self) -> &HeaderValue {
        &self.origin
    }

    /// Write the CORS headers for a request carrying `request_headers` into
    /// `response_headers`.
    pub fn apply(&self, request_headers: &HeaderMap, response_headers: &mut HeaderMap) {
        let requested = request_headers
            .get(ACCESS_CONTROL_REQUEST_HEADERS)
            .cloned()
            .unwrap_or_else(|| HeaderValue::from_static(""));

        response_headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, self.origin.clone());
        response_headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, requested);
        response_headers.insert(
            HeaderName::from_static(ALLOW_METHOD_LEGACY),
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        response_headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
    }
}

impl Default for CorsNegotiator {
    fn default() -> Self {
        Self {
            origin: HeaderValue::from_static("*"),
        }
    }
}

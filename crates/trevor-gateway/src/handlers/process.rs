//! Process endpoint
//!
//! POST    /{route} - validate the input field, run the processor, return an envelope
//! OPTIONS /{route} - CORS preflight, empty body

use axum::{
    body::{Body, to_bytes},
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, StatusCode, header, request::Parts},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use trevor_kernel::ProcessRequest;
use uuid::Uuid;

use crate::envelope::{APPLICATION_JSON, Envelope, extract_text};
use crate::state::AppState;

/// Failure message when the processor task panics or is aborted.
pub const PROCESSOR_TERMINATED: &str = "processor terminated unexpectedly";

/// POST /{route}
///
/// Reads the whole body, validates the configured input field and invokes the
/// processor exactly once.  Every outcome is a JSON envelope: 200 on success,
/// 400 for validation and processor failures alike.
pub async fn process(State(state): State<AppState>, request: Request) -> Response {
    let started = Instant::now();
    let request_id = Uuid::new_v4().to_string();
    let (parts, body) = request.into_parts();

    info!(
        request_id = %request_id,
        method     = %parts.method,
        path       = %parts.uri.path(),
        "→ inbound request"
    );

    let text = match to_bytes(body, state.max_body_bytes).await {
        Ok(bytes) => extract_text(&bytes, &state.input_field),
        Err(err) => {
            debug!(request_id = %request_id, error = %err, "request body could not be read");
            None
        }
    };

    let (envelope, token) = match text {
        Some(text) => invoke_processor(&state, &request_id, &parts, &text).await,
        None => {
            debug!(
                request_id = %request_id,
                field = %state.input_field,
                "input field missing or blank"
            );
            (Envelope::failure(&*state.mandatory_message), None)
        }
    };

    let status = envelope.status();
    let kind = match &envelope {
        Envelope::Success { kind, .. } => kind.clone(),
        Envelope::Failure { .. } => String::new(),
    };

    let mut response = envelope.into_response();
    state.cors.apply(&parts.headers, response.headers_mut());
    if let (Some(bridge), Some(token)) = (&state.tokens, token) {
        bridge.write(&token, response.headers_mut());
    }

    info!(
        request_id = %request_id,
        status     = status.as_u16(),
        kind       = %kind,
        latency_ms = started.elapsed().as_millis() as u64,
        "← outbound response"
    );

    response
}

/// Run the processor on its own task so a client disconnect, which drops this
/// handler's future, cannot cancel a call that is already in flight.
///
/// Returns the envelope plus the token to echo (success only).
async fn invoke_processor(
    state: &AppState,
    request_id: &str,
    parts: &Parts,
    text: &str,
) -> (Envelope, Option<String>) {
    let mut request =
        ProcessRequest::new(request_id, parts.uri.path(), text).with_method(parts.method.as_str());
    for (name, value) in &parts.headers {
        if let Ok(v) = value.to_str() {
            request = request.with_header(name.as_str(), v);
        }
    }
    if let Some(bridge) = &state.tokens {
        request.set_token(bridge.read(&parts.headers));
    }

    let processor = Arc::clone(&state.processor);
    let task = tokio::spawn(async move {
        let result = processor.process(&mut request).await;
        (request, result)
    });

    match task.await {
        Ok((request, Ok(output))) => {
            let token = state.tokens.as_ref().map(|_| request.token().to_string());
            (Envelope::success(output), token)
        }
        Ok((_, Err(err))) => {
            warn!(request_id = %request_id, error = %err, "processor failed");
            (Envelope::failure(err.to_string()), None)
        }
        Err(err) => {
            error!(request_id = %request_id, error = %err, "processor task did not complete");
            (Envelope::failure(PROCESSOR_TERMINATED), None)
        }
    }
}

/// OPTIONS /{route}
///
/// Answers the browser preflight with CORS headers only; the body is never read.
pub async fn preflight(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let mut response = (
        StatusCode::OK,
        [(header::CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON))],
        Body::empty(),
    )
        .into_response();
    state.cors.apply(&headers, response.headers_mut());
    response
}

/// Any other method or path.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

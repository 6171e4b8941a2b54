// POST /validate: check a comment against the blocklist.
//
// Request:  {"comment": "<text>"}   (Content-Type is not checked)
// Response: 200 {"message": "Comment is valid"}
//           400 {"message": "Comment contains inappropriate content"}
//           400 text/plain "Invalid request payload" | "Comment is empty"
//           405 text/plain "Method not allowed"
//
// The route is registered for every method so that a wrong method still
// gets a correlation ID and a log line before it is turned away. The body
// is only read once the method has been accepted.
//
// Body decoding is lenient in the same places as the service this replaces:
// only the first JSON value is read (trailing bytes are ignored), a `null`
// body or `null` comment counts as empty, and the key matches
// case-insensitively ("Comment", "COMMENT").

use std::time::Instant;

use axum::extract::{Request, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::output::log_preview;
use crate::web::error::ApiError;
use crate::web::{request_id, AppState};

pub const VALID_MESSAGE: &str = "Comment is valid";
pub const REJECTED_MESSAGE: &str = "Comment contains inappropriate content";

#[derive(Debug, Default, PartialEq)]
pub struct ValidationRequest {
    /// Missing or `null` decodes as "" and is then rejected as empty.
    pub comment: String,
}

impl ValidationRequest {
    /// Decode the first JSON value in `bytes`. Anything after it is ignored.
    ///
    /// An exact `comment` key wins over a case-insensitive match. The error
    /// string is only used for logging.
    pub fn from_json(bytes: &[u8]) -> Result<Self, String> {
        let value = serde_json::Deserializer::from_slice(bytes)
            .into_iter::<Value>()
            .next()
            .ok_or_else(|| "empty body".to_string())?
            .map_err(|e| e.to_string())?;

        let fields = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(fields) => fields,
            other => return Err(format!("expected a JSON object, got {other}")),
        };

        let comment = fields.get("comment").or_else(|| {
            fields
                .iter()
                .find(|(key, _)| key.to_lowercase() == "comment")
                .map(|(_, v)| v)
        });

        match comment {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(Value::String(text)) => Ok(Self {
                comment: text.clone(),
            }),
            Some(other) => Err(format!("comment must be a string, got {other}")),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ValidationResponse {
    pub message: String,
}

/// Outcome of validating a well-formed, non-empty comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Rejected,
}

impl IntoResponse for Verdict {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Verdict::Valid => (StatusCode::OK, VALID_MESSAGE),
            Verdict::Rejected => (StatusCode::BAD_REQUEST, REJECTED_MESSAGE),
        };
        (
            status,
            Json(ValidationResponse {
                message: message.to_string(),
            }),
        )
            .into_response()
    }
}

pub async fn validate_comment(State(state): State<AppState>, request: Request) -> Response {
    let start = Instant::now();
    let request_id = request_id::resolve(request.headers(), state.request_ids.as_ref());

    info!(request_id = %request_id, method = %request.method(), "Received request");

    match handle(&state, &request_id, start, request).await {
        Ok(verdict) => verdict.into_response(),
        Err(e) => e.into_response(),
    }
}

async fn handle(
    state: &AppState,
    request_id: &str,
    start: Instant,
    request: Request,
) -> Result<Verdict, ApiError> {
    if *request.method() != Method::POST {
        warn!(request_id = %request_id, method = %request.method(), "Method not allowed");
        return Err(ApiError::MethodNotAllowed);
    }

    let payload = parse_payload(request, state.max_body_bytes)
        .await
        .map_err(|reason| {
            warn!(request_id = %request_id, error = %reason, "Invalid request payload");
            ApiError::InvalidPayload
        })?;

    if payload.comment.is_empty() {
        warn!(request_id = %request_id, "Comment is empty");
        return Err(ApiError::EmptyComment);
    }

    match state.validator.find_blocked_term(&payload.comment) {
        Some(term) => {
            warn!(
                request_id = %request_id,
                trigger = term,
                comment = %log_preview(&payload.comment),
                "Validation failed"
            );
            Ok(Verdict::Rejected)
        }
        None => {
            info!(
                request_id = %request_id,
                comment = %log_preview(&payload.comment),
                elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
                "Validation succeeded"
            );
            Ok(Verdict::Valid)
        }
    }
}

/// Read at most `limit` bytes of body and decode it.
async fn parse_payload(request: Request, limit: usize) -> Result<ValidationRequest, String> {
    let bytes = axum::body::to_bytes(request.into_body(), limit)
        .await
        .map_err(|e| e.to_string())?;
    ValidationRequest::from_json(&bytes)
}

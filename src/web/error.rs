// Request errors: the plain-text failure responses of /validate.
//
// Every failure that stops a request before a verdict goes through
// ApiError's IntoResponse, so status and body always agree. A rejected
// comment is not an error; it is a Verdict (see handlers::validate).

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Anything other than POST. Raised before the body is read.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Body unreadable, too large, or not a JSON comment object.
    #[error("Invalid request payload")]
    InvalidPayload,

    /// `comment` missing or the empty string.
    #[error("Comment is empty")]
    EmptyComment,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidPayload | ApiError::EmptyComment => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}

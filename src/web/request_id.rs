// Correlation IDs: tie every log line of one request together.
//
// The caller may send X-Request-ID; otherwise an ID is minted from the
// RequestIdSource held in AppState. The source is a trait object so tests
// can swap in a deterministic sequence instead of random UUIDs.

use axum::http::HeaderMap;
use uuid::Uuid;

/// Header carrying a caller-supplied correlation ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// A source of fresh, unique correlation IDs.
pub trait RequestIdSource: Send + Sync {
    fn next_id(&self) -> String;
}

/// Default source: random UUID v4 strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidRequestIds;

impl RequestIdSource for UuidRequestIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Use the inbound X-Request-ID if it is present, non-empty, and valid
/// UTF-8. Otherwise ask `source` for a new one.
pub fn resolve(headers: &HeaderMap, source: &dyn RequestIdSource) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| source.next_id())
}

//! Consistent JSON error responses.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use ledgerdash_store::StoreError;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Map a store failure onto the wire.
///
/// An unreachable backend aborts the whole page computation; the caller gets
/// a hard failure, never a partial page.
pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::Unavailable(msg) => {
            tracing::error!(error = %msg, "backing store unavailable");
            json_error(StatusCode::BAD_GATEWAY, "store_error", msg)
        }
        StoreError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        StoreError::Invalid(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_write", msg),
    }
}

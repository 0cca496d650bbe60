//! Liveness endpoint.

use axum::http::StatusCode;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately without touching the store. Used to check if the
/// server is accepting connections.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

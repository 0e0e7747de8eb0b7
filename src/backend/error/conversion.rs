/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse` from Axum, so handlers can return
 * it directly. The error becomes a status code and a JSON body:
 *
 * ```json
 * {
 *   "error": "Invalid credentials",
 *   "status": 401
 * }
 * ```
 *
 * Internal causes are logged here, at the boundary, and replaced by a
 * generic message in the body.
 */

use axum::response::{IntoResponse, Json, Response};

use crate::backend::error::types::{AuthError, BackendError};

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if self.is_internal() {
            tracing::error!("Request failed: {}", self);
        }

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        BackendError::from(self).into_response()
    }
}

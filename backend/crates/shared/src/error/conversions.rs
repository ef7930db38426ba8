//! Error conversions - Framework integrations for [`AppError`]
//!
//! Every error leaves the service as the fixed response envelope:
//! `{"status":"error","message":…,"data":null,"errors":[{"code":…,"message":…}]}`.

#[cfg(feature = "axum")]
use super::app_error::AppError;

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use crate::response::ApiResponse;
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body: ApiResponse<()> =
            ApiResponse::error(self.message().to_owned(), self.response_errors());

        (status, Json(body)).into_response()
    }
}

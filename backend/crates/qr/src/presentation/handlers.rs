//! HTTP Handlers

use crate::application::generate_qr::GenerateQrUseCase;
use crate::domain::renderer::QrRenderer;
use crate::error::QrResult;
use crate::presentation::dto::{QrData, QrRequest, ServiceStatusResponse};
use crate::presentation::extract::QrJson;
use axum::Json;
use axum::extract::State;
use base64::Engine;
use base64::engine::general_purpose;
use kernel::error::app_error::AppError;
use kernel::response::ApiResponse;
use std::sync::Arc;

/// Envelope message for a generated code
pub const QR_GENERATED_MESSAGE: &str = "QR code generated.";

/// Shared state for QR handlers
pub struct QrAppState<R>
where
    R: QrRenderer,
{
    pub renderer: Arc<R>,
}

impl<R> Clone for QrAppState<R>
where
    R: QrRenderer,
{
    fn clone(&self) -> Self {
        Self {
            renderer: Arc::clone(&self.renderer),
        }
    }
}

/// GET / and GET /health
pub async fn service_status() -> Json<ServiceStatusResponse> {
    Json(ServiceStatusResponse::online())
}

/// POST /qr
pub async fn generate_qr<R>(
    State(state): State<QrAppState<R>>,
    QrJson(req): QrJson<QrRequest>,
) -> QrResult<Json<ApiResponse<QrData>>>
where
    R: QrRenderer,
{
    let use_case = GenerateQrUseCase::new(state.renderer.clone());

    let output = use_case.execute(req.data).await?;

    tracing::info!(
        version = output.version,
        png_bytes = output.png.len(),
        "QR code generated"
    );

    Ok(Json(ApiResponse::success(
        QR_GENERATED_MESSAGE,
        QrData {
            qr_base64: general_purpose::STANDARD.encode(&output.png),
        },
    )))
}

/// Fallback for unknown paths
pub async fn endpoint_not_found() -> AppError {
    AppError::not_found("Endpoint not found.").with_error(
        "ENDPOINT_NOT_FOUND",
        "The requested endpoint does not exist.",
    )
}

/// Fallback for known paths hit with the wrong method
pub async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed("Method not allowed.").with_error(
        "METHOD_NOT_ALLOWED",
        "The requested method is not supported for this endpoint.",
    )
}

//! QR Error Types
//!
//! This module provides QR-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// QR-specific result type alias
pub type QrResult<T> = Result<T, QrError>;

/// Envelope message for request validation failures
pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed.";
/// Envelope message for encode/render failures
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate QR code.";

/// QR-specific error variants
#[derive(Debug, Error)]
pub enum QrError {
    /// Request body is not JSON, or `data` is missing / not a string
    #[error("{0}")]
    InvalidRequest(String),

    /// Input does not fit any QR version at the configured error-correction level
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),

    /// Image library failed to serialize the PNG
    #[error("PNG rendering failed: {0}")]
    Render(#[from] image::ImageError),

    /// Rejected render or encoder settings
    #[error("Invalid QR configuration: {0}")]
    InvalidConfig(String),

    /// Internal error (e.g. the rendering task was cancelled)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl QrError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            QrError::InvalidRequest(_) => ErrorKind::BadRequest,
            QrError::Encode(_)
            | QrError::Render(_)
            | QrError::InvalidConfig(_)
            | QrError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Machine-readable code placed in `errors[].code`
    pub fn code(&self) -> &'static str {
        match self {
            QrError::InvalidRequest(_) => "VALIDATION_FAILED",
            QrError::Encode(_) | QrError::Render(_) | QrError::Internal(_) => {
                "QR_GENERATION_FAILED"
            }
            QrError::InvalidConfig(_) => "INVALID_CONFIGURATION",
        }
    }

    /// Top-level envelope message
    pub fn envelope_message(&self) -> &'static str {
        match self {
            QrError::InvalidRequest(_) => VALIDATION_FAILED_MESSAGE,
            QrError::Encode(_) | QrError::Render(_) | QrError::Internal(_) => {
                GENERATION_FAILED_MESSAGE
            }
            QrError::InvalidConfig(_) => "Invalid QR configuration.",
        }
    }

    /// Human-readable detail placed in `errors[].message`; never empty
    pub fn detail(&self) -> String {
        let detail = self.to_string();
        if detail.trim().is_empty() {
            self.kind().as_str().to_string()
        } else {
            detail
        }
    }

    /// Convert to AppError, keeping this error as its source
    pub fn into_app_error(self) -> AppError {
        AppError::new(self.kind(), self.envelope_message())
            .with_error(self.code(), self.detail())
            .with_source(self)
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            QrError::Encode(e) => {
                tracing::error!(error = %e, "QR encoding failed");
            }
            QrError::Render(e) => {
                tracing::error!(error = %e, "QR PNG rendering failed");
            }
            QrError::InvalidConfig(msg) | QrError::Internal(msg) => {
                tracing::error!(message = %msg, "QR internal error");
            }
            QrError::InvalidRequest(msg) => {
                tracing::debug!(reason = %msg, "Rejected QR request");
            }
        }
    }
}

impl From<QrError> for AppError {
    fn from(err: QrError) -> Self {
        err.into_app_error()
    }
}

impl From<JsonRejection> for QrError {
    fn from(rejection: JsonRejection) -> Self {
        QrError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for QrError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

//! Request Extractors

use axum::extract::FromRequest;

use crate::error::QrError;

/// `axum::Json` whose rejections become [`QrError::InvalidRequest`],
/// so malformed bodies are answered with the error envelope
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(QrError))]
pub struct QrJson<T>(pub T);

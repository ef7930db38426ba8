//! QR Code Service Module
//!
//! Clean Architecture structure:
//! - `domain/` - Module grid, render options, encode/rasterize services, renderer trait
//! - `application/` - Configuration and the generate-QR use case
//! - `infra/` - PNG renderer backed by `qrcode` + `image`
//! - `presentation/` - HTTP handlers, DTOs, JSON extractor, router
//!
//! ## Contract
//! - `POST /qr` turns `{"data": "<text>"}` into a base64 PNG wrapped in the response envelope
//! - Generation is a pure function of the input text and the (immutable) configuration
//! - Every failure leaves the service as the fixed error envelope, never as a bare status

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::QrConfig;
pub use domain::value_objects::ErrorCorrection;
pub use error::{QrError, QrResult};
pub use infra::png::PngQrRenderer;
pub use presentation::router::{qr_router, qr_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;

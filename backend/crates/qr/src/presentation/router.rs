//! QR Router

use crate::application::config::QrConfig;
use crate::domain::renderer::QrRenderer;
use crate::error::QrResult;
use crate::infra::png::PngQrRenderer;
use crate::presentation::handlers::{self, QrAppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the QR router with the PNG renderer
pub fn qr_router(config: &QrConfig) -> QrResult<Router> {
    let renderer = PngQrRenderer::new(config)?;
    Ok(qr_router_generic(renderer))
}

/// Create a generic QR router for any renderer implementation
pub fn qr_router_generic<R>(renderer: R) -> Router
where
    R: QrRenderer,
{
    let state = QrAppState {
        renderer: Arc::new(renderer),
    };

    Router::new()
        .route(
            "/",
            get(handlers::service_status).fallback(handlers::method_not_allowed),
        )
        .route(
            "/health",
            get(handlers::service_status).fallback(handlers::method_not_allowed),
        )
        .route(
            "/qr",
            post(handlers::generate_qr::<R>).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::endpoint_not_found)
        .with_state(state)
}

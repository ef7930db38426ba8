//! Generate QR Use Case

use crate::domain::renderer::QrRenderer;
use crate::domain::value_objects::RenderedQr;
use crate::error::{QrError, QrResult};
use std::sync::Arc;

/// Generate QR Use Case
pub struct GenerateQrUseCase<R>
where
    R: QrRenderer,
{
    renderer: Arc<R>,
}

impl<R> GenerateQrUseCase<R>
where
    R: QrRenderer,
{
    pub fn new(renderer: Arc<R>) -> Self {
        Self { renderer }
    }

    pub async fn execute(&self, data: String) -> QrResult<RenderedQr> {
        let input_bytes = data.len();
        let renderer = Arc::clone(&self.renderer);

        // Encoding and PNG compression are CPU-bound
        let rendered = tokio::task::spawn_blocking(move || renderer.render(&data))
            .await
            .map_err(|e| QrError::Internal(format!("QR rendering task failed: {e}")))??;

        tracing::debug!(
            input_bytes,
            version = rendered.version,
            modules = rendered.width,
            png_bytes = rendered.png.len(),
            "Generated QR code"
        );

        Ok(rendered)
    }
}

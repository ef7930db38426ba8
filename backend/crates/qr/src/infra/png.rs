//! PNG Renderer Implementation

use crate::application::config::QrConfig;
use crate::domain::renderer::QrRenderer;
use crate::domain::services::{encode, rasterize, to_png};
use crate::domain::value_objects::{ErrorCorrection, RenderOptions, RenderedQr};
use crate::error::QrResult;

/// `qrcode` + `image` backed renderer
#[derive(Debug, Clone)]
pub struct PngQrRenderer {
    error_correction: ErrorCorrection,
    options: RenderOptions,
}

impl PngQrRenderer {
    pub fn new(config: &QrConfig) -> QrResult<Self> {
        Ok(Self {
            error_correction: config.error_correction,
            options: config.render_options()?,
        })
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }
}

impl Default for PngQrRenderer {
    fn default() -> Self {
        Self {
            error_correction: ErrorCorrection::default(),
            options: RenderOptions::default(),
        }
    }
}

impl QrRenderer for PngQrRenderer {
    fn render(&self, text: &str) -> QrResult<RenderedQr> {
        let grid = encode(text, self.error_correction)?;
        let img = rasterize(&grid, &self.options);
        let png = to_png(&img)?;

        Ok(RenderedQr {
            png,
            version: grid.version(),
            width: grid.width(),
        })
    }
}

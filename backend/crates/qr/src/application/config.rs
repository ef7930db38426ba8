//! Application Configuration
//!
//! Configuration for QR generation.

use crate::domain::value_objects::{ErrorCorrection, RenderOptions};
use crate::error::QrResult;

/// QR application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrConfig {
    /// Pixels per QR module
    pub box_size: u32,
    /// Quiet-zone width in modules
    pub border: u32,
    /// Dark module color (RGB)
    pub foreground: [u8; 3],
    /// Light module and border color (RGB)
    pub background: [u8; 3],
    /// Error-correction level; the version is always fitted to the input
    pub error_correction: ErrorCorrection,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            box_size: RenderOptions::DEFAULT_BOX_SIZE,
            border: RenderOptions::DEFAULT_BORDER,
            foreground: RenderOptions::BLACK,
            background: RenderOptions::WHITE,
            error_correction: ErrorCorrection::default(),
        }
    }
}

impl QrConfig {
    /// Build the validated render options
    pub fn render_options(&self) -> QrResult<RenderOptions> {
        RenderOptions::new(
            self.box_size,
            self.border,
            self.foreground,
            self.background,
        )
    }

    pub fn validate(&self) -> QrResult<()> {
        self.render_options().map(|_| ())
    }
}

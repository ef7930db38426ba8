//! Renderer Trait
//!
//! Interface for the encode-and-render capability. Implementation is in infrastructure layer.

use crate::domain::value_objects::RenderedQr;
use crate::error::QrResult;

/// Turns text into a PNG depicting its QR code.
///
/// Implementations must be deterministic and hold no mutable state:
/// handlers share one instance across all requests.
pub trait QrRenderer: Send + Sync + 'static {
    fn render(&self, text: &str) -> QrResult<RenderedQr>;
}

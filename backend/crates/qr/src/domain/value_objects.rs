//! Domain Value Objects
//!
//! Immutable value types for the QR domain.

use std::fmt;
use std::str::FromStr;

use qrcode::EcLevel;

use crate::error::{QrError, QrResult};

/// QR error-correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCorrection {
    /// ~7% of codewords can be restored
    Low,
    /// ~15%; the encoder library's default
    #[default]
    Medium,
    /// ~25%
    Quartile,
    /// ~30%
    High,
}

impl ErrorCorrection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCorrection::Low => "L",
            ErrorCorrection::Medium => "M",
            ErrorCorrection::Quartile => "Q",
            ErrorCorrection::High => "H",
        }
    }
}

impl fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCorrection {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "low" => Ok(ErrorCorrection::Low),
            "m" | "medium" => Ok(ErrorCorrection::Medium),
            "q" | "quartile" => Ok(ErrorCorrection::Quartile),
            "h" | "high" => Ok(ErrorCorrection::High),
            other => Err(QrError::InvalidConfig(format!(
                "unknown error-correction level {other:?} (expected L, M, Q or H)"
            ))),
        }
    }
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => EcLevel::L,
            ErrorCorrection::Medium => EcLevel::M,
            ErrorCorrection::Quartile => EcLevel::Q,
            ErrorCorrection::High => EcLevel::H,
        }
    }
}

/// Square grid of dark/light modules produced by the encoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    width: usize,
    version: i16,
    dark: Vec<bool>,
}

impl ModuleGrid {
    /// `dark` is row-major and must hold exactly `width * width` entries.
    pub(crate) fn new(width: usize, version: i16, dark: Vec<bool>) -> Self {
        debug_assert_eq!(dark.len(), width * width);
        Self {
            width,
            version,
            dark,
        }
    }

    /// Side length in modules (21 for version 1, 177 for version 40)
    pub fn width(&self) -> usize {
        self.width
    }

    /// QR version picked by the encoder (1..=40)
    pub fn version(&self) -> i16 {
        self.version
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.dark[y * self.width + x]
    }
}

/// Rasterization parameters
///
/// Construction validates the bounds, so every `RenderOptions` value
/// describes an image that fits comfortably in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    box_size: u32,
    border: u32,
    foreground: [u8; 3],
    background: [u8; 3],
}

impl RenderOptions {
    pub const DEFAULT_BOX_SIZE: u32 = 10;
    pub const DEFAULT_BORDER: u32 = 4;
    pub const MAX_BOX_SIZE: u32 = 32;
    pub const MAX_BORDER: u32 = 16;
    pub const BLACK: [u8; 3] = [0, 0, 0];
    pub const WHITE: [u8; 3] = [255, 255, 255];

    pub fn new(
        box_size: u32,
        border: u32,
        foreground: [u8; 3],
        background: [u8; 3],
    ) -> QrResult<Self> {
        if box_size == 0 || box_size > Self::MAX_BOX_SIZE {
            return Err(QrError::InvalidConfig(format!(
                "box size must be between 1 and {}, got {box_size}",
                Self::MAX_BOX_SIZE
            )));
        }
        if border > Self::MAX_BORDER {
            return Err(QrError::InvalidConfig(format!(
                "border must be at most {} modules, got {border}",
                Self::MAX_BORDER
            )));
        }
        if foreground == background {
            return Err(QrError::InvalidConfig(
                "foreground and background colors must differ".to_string(),
            ));
        }
        Ok(Self {
            box_size,
            border,
            foreground,
            background,
        })
    }

    pub fn box_size(&self) -> u32 {
        self.box_size
    }

    pub fn border(&self) -> u32 {
        self.border
    }

    pub fn foreground(&self) -> [u8; 3] {
        self.foreground
    }

    pub fn background(&self) -> [u8; 3] {
        self.background
    }

    /// Image side length in pixels for a grid `modules` wide
    pub fn image_side(&self, modules: usize) -> u32 {
        (modules as u32 + 2 * self.border) * self.box_size
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            box_size: Self::DEFAULT_BOX_SIZE,
            border: Self::DEFAULT_BORDER,
            foreground: Self::BLACK,
            background: Self::WHITE,
        }
    }
}

/// Output of a renderer: the PNG plus what the encoder chose
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedQr {
    pub png: Vec<u8>,
    pub version: i16,
    pub width: usize,
}

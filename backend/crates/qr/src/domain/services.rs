//! Domain Services
//!
//! Pure functions: text → module grid → raster image → PNG bytes.

use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};
use qrcode::bits::Bits;
use qrcode::types::QrError as EncodeError;
use qrcode::{Color, EcLevel, QrCode, Version};

use crate::domain::value_objects::{ErrorCorrection, ModuleGrid, RenderOptions};
use crate::error::QrResult;

/// Encode `text` into the smallest QR version that holds its UTF-8 bytes at `level`
pub fn encode(text: &str, level: ErrorCorrection) -> QrResult<ModuleGrid> {
    let ec_level = level.into();
    let code = if text.is_ascii() {
        QrCode::with_error_correction_level(text.as_bytes(), ec_level)?
    } else {
        encode_byte_mode(text.as_bytes(), ec_level)?
    };

    let version = match code.version() {
        Version::Normal(v) | Version::Micro(v) => v,
    };
    let width = code.width();
    let dark = code
        .to_colors()
        .into_iter()
        .map(|color| color == Color::Dark)
        .collect();

    Ok(ModuleGrid::new(width, version, dark))
}

/// Byte mode only. The segment optimizer would otherwise read some UTF-8
/// byte pairs as Shift JIS and emit Kanji segments that scanners decode wrongly.
fn encode_byte_mode(data: &[u8], ec_level: EcLevel) -> QrResult<QrCode> {
    for v in 1..=40 {
        let mut bits = Bits::new(Version::Normal(v));
        if bits.push_byte_data(data).is_err() || bits.push_terminator(ec_level).is_err() {
            continue;
        }
        return Ok(QrCode::with_bits(bits, ec_level)?);
    }
    Err(EncodeError::DataTooLong.into())
}

/// Rasterize a grid: each module becomes a `box_size` square, surrounded by
/// `border` modules of background
pub fn rasterize(grid: &ModuleGrid, options: &RenderOptions) -> RgbImage {
    let side = options.image_side(grid.width());
    let box_size = options.box_size();
    let border = options.border();
    let foreground = Rgb(options.foreground());

    let mut img = RgbImage::from_pixel(side, side, Rgb(options.background()));

    for y in 0..grid.width() {
        for x in 0..grid.width() {
            if !grid.is_dark(x, y) {
                continue;
            }
            let px = (x as u32 + border) * box_size;
            let py = (y as u32 + border) * box_size;
            for dy in 0..box_size {
                for dx in 0..box_size {
                    img.put_pixel(px + dx, py + dy, foreground);
                }
            }
        }
    }

    img
}

/// Serialize an image as PNG
pub fn to_png(img: &RgbImage) -> QrResult<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

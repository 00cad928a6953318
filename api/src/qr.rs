//! QR rendering glue: a URL in, PNG bytes out.

use anyhow::Result;
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;
use std::io::Cursor;

/// Encodes `data` as a QR code and renders it to a PNG image.
///
/// Nothing is cached; every call re-renders.
pub fn render_png(data: &str) -> Result<Vec<u8>> {
    let code = QrCode::new(data.as_bytes())?;
    let img = code.render::<Luma<u8>>().min_dimensions(240, 240).build();

    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageLuma8(img).write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

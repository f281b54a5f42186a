//! Re-encode generated images to PNG for download.
//!
//! The transform is stateless: it reads a payload and returns fresh bytes.
//! Payloads that already are PNG are passed through unchanged.

use std::io::Cursor;

use image::ImageFormat;
use pictor_core::payload::ImagePayload;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("couldn’t re-encode image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Encode `payload` as PNG.
pub fn to_png(payload: &ImagePayload) -> Result<Vec<u8>, ExportError> {
    if payload.format() == ImageFormat::Png {
        return Ok(payload.bytes().to_vec());
    }

    let decoded = image::load_from_memory_with_format(payload.bytes(), payload.format())?;
    let mut out = Cursor::new(Vec::with_capacity(payload.len()));
    decoded.write_to(&mut out, ImageFormat::Png)?;

    Ok(out.into_inner())
}

#[cfg(test)]
mod tests {
    use image::{DynamicImage, Rgb, RgbImage};

    use super::*;

    fn payload(format: ImageFormat) -> ImagePayload {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(6, 4, Rgb([255, 128, 0])));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, format).unwrap();
        ImagePayload::decode(buf.into_inner()).unwrap()
    }

    #[test]
    fn png_passes_through() {
        let png = payload(ImageFormat::Png);
        assert_eq!(to_png(&png).unwrap(), png.bytes());
    }

    #[test]
    fn jpeg_is_reencoded_as_png() {
        let jpeg = payload(ImageFormat::Jpeg);
        let png = to_png(&jpeg).unwrap();

        assert_eq!(image::guess_format(&png).unwrap(), ImageFormat::Png);
        let reloaded = ImagePayload::decode(png).unwrap();
        assert_eq!(reloaded.dimensions(), jpeg.dimensions());
    }
}

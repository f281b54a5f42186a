//! Owned, validated image bytes as returned by a provider.

use bytes::Bytes;
use image::ImageFormat;

use crate::error::{PictorError, Result};

/// An image returned by a text-to-image backend.
///
/// Construction goes through [`ImagePayload::decode`], so every payload is
/// known to be a decodable raster image of a recognised format.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    data: Bytes,
    format: ImageFormat,
    width: u32,
    height: u32,
}

impl ImagePayload {
    /// Sniff the format of `data`, decode it once and keep the original bytes.
    ///
    /// # Errors
    ///
    /// * [`PictorError::InvalidImage`] if the bytes are not an image the
    ///   enabled codecs understand.
    pub fn decode(data: impl Into<Bytes>) -> Result<Self> {
        let data = data.into();

        let format =
            image::guess_format(&data).map_err(|err| PictorError::InvalidImage(err.to_string()))?;
        let decoded = image::load_from_memory_with_format(&data, format)
            .map_err(|err| PictorError::InvalidImage(err.to_string()))?;

        Ok(Self {
            data,
            format,
            width: decoded.width(),
            height: decoded.height(),
        })
    }

    /// Raw encoded bytes, exactly as received.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

//! JPEG + Base64 image codec.
//!
//! Pictures are stored as standard-alphabet, padded Base64 text of a JPEG
//! re-compression of whatever raster format the user picked.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use cookbook_core::config::{ImageSettings, MAX_JPEG_QUALITY};
use cookbook_core::error::{CookbookError, Result};
use cookbook_core::image::ImageCodec;
use image::codecs::jpeg::JpegEncoder;

/// Image codec backed by the `image` and `base64` crates.
#[derive(Debug, Clone)]
pub struct JpegBase64Codec {
    quality: u8,
}

impl JpegBase64Codec {
    /// Creates a codec compressing at maximum JPEG quality.
    pub fn new() -> Self {
        Self {
            quality: MAX_JPEG_QUALITY,
        }
    }

    pub fn from_settings(settings: &ImageSettings) -> Self {
        Self {
            quality: settings.effective_quality(),
        }
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }

    fn compress_jpeg(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        let decoded = image::load_from_memory(bytes)
            .map_err(|e| CookbookError::decode(format!("Failed to read image: {}", e)))?;

        // JPEG has no alpha channel
        let rgb = decoded.to_rgb8();

        let mut jpeg = Vec::new();
        JpegEncoder::new_with_quality(&mut jpeg, self.quality)
            .encode_image(&rgb)
            .map_err(|e| CookbookError::decode(format!("Failed to compress image: {}", e)))?;
        Ok(jpeg)
    }
}

impl Default for JpegBase64Codec {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCodec for JpegBase64Codec {
    fn encode(&self, bytes: &[u8]) -> Result<String> {
        let jpeg = self.compress_jpeg(bytes)?;
        tracing::debug!(
            "Encoded image: {} source bytes -> {} jpeg bytes",
            bytes.len(),
            jpeg.len()
        );
        Ok(BASE64_STANDARD.encode(jpeg))
    }

    fn decode(&self, text: &str) -> Option<Vec<u8>> {
        // Payloads written with 76-column line wrapping must still decode
        let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();

        let bytes = match BASE64_STANDARD.decode(compact.as_bytes()) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("Image payload is not valid Base64: {}", e);
                return None;
            }
        };

        if let Err(e) = image::load_from_memory(&bytes) {
            tracing::warn!("Image payload is not a decodable image: {}", e);
            return None;
        }

        Some(bytes)
    }
}

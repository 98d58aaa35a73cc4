//! Image codec contract.

use crate::error::Result;

/// Converts between raw image bytes and the text payload stored in
/// `profileImage`.
pub trait ImageCodec: Send + Sync {
    /// Decodes `bytes` as a raster image and re-encodes it as Base64 JPEG text.
    ///
    /// Fails with `CookbookError::DecodeFailure` when `bytes` is not an image.
    fn encode(&self, bytes: &[u8]) -> Result<String>;

    /// Inverse of [`ImageCodec::encode`].
    ///
    /// Malformed text or undecodable image bytes yield `None`.
    fn decode(&self, text: &str) -> Option<Vec<u8>>;
}

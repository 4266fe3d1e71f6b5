//! Client-side image compression before upload.
//!
//! Large camera originals are downscaled to fit 1920 px and re-encoded as
//! JPEG, stepping the quality down toward a 1 MB target. Best effort: the
//! smallest attempt is returned even when the target is not reached, so a
//! busy photo never blocks an upload.

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;

use crate::error::ClientError;

/// Longest allowed edge after downscaling.
pub const MAX_DIMENSION: u32 = 1920;

/// Target encoded size (1 MB).
pub const TARGET_BYTES: usize = 1024 * 1024;

/// Quality ladder, tried in order until the target is met.
const QUALITY_STEPS: &[u8] = &[85, 75, 65, 55, 45, 35];

/// A compressed upload payload. Always JPEG, regardless of input encoding.
#[derive(Debug, Clone)]
pub struct CompressedImage {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

/// Compress raw image bytes (JPEG, PNG, or WebP) for upload.
pub fn compress_for_upload(bytes: &[u8]) -> Result<CompressedImage, ClientError> {
    let decoded = image::load_from_memory(bytes)?;

    let resized = if decoded.width() > MAX_DIMENSION || decoded.height() > MAX_DIMENSION {
        decoded.resize(MAX_DIMENSION, MAX_DIMENSION, FilterType::Lanczos3)
    } else {
        decoded
    };

    // JPEG has no alpha channel.
    let rgb = DynamicImage::ImageRgb8(resized.to_rgb8());

    let mut best: Option<Vec<u8>> = None;
    for &quality in QUALITY_STEPS {
        let mut out = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut out, quality);
        rgb.write_with_encoder(encoder)?;

        let within_target = out.len() <= TARGET_BYTES;
        best = Some(out);
        if within_target {
            break;
        }
    }

    let bytes = best.unwrap_or_default();
    tracing::debug!(size = bytes.len(), "Compressed image for upload");

    Ok(CompressedImage {
        bytes,
        content_type: "image/jpeg",
    })
}

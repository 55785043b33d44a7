//! Lossy compression of a captured frame into a transport payload.

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};

use menulens_core::{RawImage, ScanError};

/// Fixed compression quality, 0.8 on the encoder's 0–1 scale.
const JPEG_QUALITY: u8 = 80;

/// Compress an RGB8 frame to JPEG bytes.
///
/// Fails with [`ScanError::EncodingFailed`] when the frame cannot be
/// rasterized: a pixel buffer whose length disagrees with its dimensions, or
/// an encoder-level failure.
pub fn encode_jpeg(image: &RawImage) -> Result<Vec<u8>, ScanError> {
    let expected = image.expected_len();
    if image.data.len() != expected {
        return Err(ScanError::EncodingFailed(format!(
            "pixel buffer is {} bytes, expected {} for {}x{} RGB8",
            image.data.len(),
            expected,
            image.width,
            image.height
        )));
    }

    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY)
        .write_image(
            &image.data,
            image.width,
            image.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| ScanError::EncodingFailed(e.to_string()))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn test_encodes_valid_frame_to_jpeg() {
        let image = RawImage::rgb8(4, 4, Bytes::from(vec![90u8; 48]));
        let jpeg = encode_jpeg(&image).unwrap();
        // JPEG SOI marker.
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_corrupt_buffer_fails_encoding() {
        let image = RawImage::rgb8(4, 4, Bytes::from(vec![90u8; 7]));
        let err = encode_jpeg(&image).unwrap_err();
        assert!(matches!(err, ScanError::EncodingFailed(_)));
    }
}

use bytes::Bytes;

/// An uncompressed RGB8 frame produced by a capture device.
///
/// `Bytes` keeps clones cheap when a captured frame moves between the
/// session and the upload flow.
#[derive(Debug, Clone, PartialEq)]
pub struct RawImage {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGB8 pixels, row-major.
    pub data: Bytes,
}

impl RawImage {
    pub fn rgb8(width: u32, height: u32, data: impl Into<Bytes>) -> Self {
        Self {
            width,
            height,
            data: data.into(),
        }
    }

    /// Byte length a well-formed RGB8 buffer must have.
    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_len() {
        let img = RawImage::rgb8(4, 2, vec![0u8; 24]);
        assert_eq!(img.expected_len(), 24);
        assert_eq!(img.data.len(), img.expected_len());
    }
}

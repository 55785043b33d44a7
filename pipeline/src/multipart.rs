//! RFC 2046-style multipart/form-data framing for the image upload.

use uuid::Uuid;

/// The single form field the endpoint expects the image under.
pub const IMAGE_FIELD: &str = "image";

/// An assembled multipart body plus the boundary token it was framed with.
#[derive(Debug, Clone)]
pub struct MultipartBody {
    pub bytes: Vec<u8>,
    pub boundary: String,
}

impl MultipartBody {
    /// Frame `image_bytes` as the single `image` part of a multipart body.
    ///
    /// A fresh random boundary is generated per call; a UUID cannot collide
    /// with JPEG content in practice. Deterministic given the boundary, no
    /// I/O.
    pub fn build(image_bytes: &[u8], filename: &str) -> Self {
        let boundary = Uuid::new_v4().to_string();
        let mut bytes = Vec::with_capacity(image_bytes.len() + 256);

        bytes.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        bytes.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{IMAGE_FIELD}\"; filename=\"{filename}\"\r\n"
            )
            .as_bytes(),
        );
        bytes.extend_from_slice(b"Content-Type: image/jpeg\r\n\r\n");
        bytes.extend_from_slice(image_bytes);
        bytes.extend_from_slice(b"\r\n");
        bytes.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

        Self { bytes, boundary }
    }

    /// Value for the request's `Content-Type` header.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pull the raw part payload back out of a framed body.
    fn extract_part(body: &MultipartBody) -> &[u8] {
        let haystack = &body.bytes;
        let header_end = haystack
            .windows(4)
            .position(|w| w == b"\r\n\r\n")
            .expect("part headers terminated by blank line")
            + 4;
        let closing = format!("\r\n--{}--\r\n", body.boundary);
        let payload_end = haystack.len() - closing.len();
        assert_eq!(&haystack[payload_end..], closing.as_bytes());
        &haystack[header_end..payload_end]
    }

    #[test]
    fn test_round_trip_preserves_bytes_exactly() {
        // Payload deliberately contains CRLF and boundary-like noise.
        let payload = b"\xFF\xD8fake-jpeg\r\n--almost-a-boundary\x00\xD9".to_vec();
        let body = MultipartBody::build(&payload, "menu_image.jpg");
        assert_eq!(extract_part(&body), payload.as_slice());
    }

    #[test]
    fn test_part_headers_and_framing() {
        let body = MultipartBody::build(b"data", "menu_image.jpg");
        let text = String::from_utf8_lossy(&body.bytes);
        assert!(text.starts_with(&format!("--{}\r\n", body.boundary)));
        assert!(text.contains(
            "Content-Disposition: form-data; name=\"image\"; filename=\"menu_image.jpg\"\r\n"
        ));
        assert!(text.contains("Content-Type: image/jpeg\r\n\r\n"));
        assert!(text.ends_with(&format!("--{}--\r\n", body.boundary)));
    }

    #[test]
    fn test_fresh_boundary_per_call() {
        let a = MultipartBody::build(b"data", "menu_image.jpg");
        let b = MultipartBody::build(b"data", "menu_image.jpg");
        assert_ne!(a.boundary, b.boundary);
    }

    #[test]
    fn test_content_type_carries_boundary() {
        let body = MultipartBody::build(b"data", "menu_image.jpg");
        assert_eq!(
            body.content_type(),
            format!("multipart/form-data; boundary={}", body.boundary)
        );
    }
}

// ==============================================================================
// validator.rs - Upload Validation Orchestrator
// ==============================================================================
// Description: Sequences size check, format detection, declared-type
//              cross-check, and content policy scan into a single verdict
// Author: Matt Barham
// Created: 2026-03-02
// Modified: 2026-04-21
// Version: 1.0.0
// Security: Strictly sequential and short-circuiting; oversized input is
//           never format-detected or scanned
// ==============================================================================

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::detector::detect_mime_type;
use crate::models::ValidationError;
use crate::scanner::scan_for_suspicious_content;

/// Maximum accepted file size (hard limit, enforced before any parsing)
pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024; // 5 MiB

/// An upload that passed every validation step.
#[derive(Debug)]
pub struct ValidatedImage {
    pub detected_type: &'static str,
    pub size: usize,
    pub hash_sha256: String,
}

/// Validate an uploaded image against the submitted bytes alone.
///
/// Pure function of `(file_data, declared_type)`: identical input always
/// produces an identical verdict. Steps run in order and a later step never
/// executes once an earlier one has rejected.
pub fn validate_image(
    file_data: &[u8],
    declared_type: Option<&str>,
) -> Result<ValidatedImage, ValidationError> {
    // 1. Size check (BEFORE any content inspection)
    let size = file_data.len();
    if size > MAX_IMAGE_SIZE {
        return Err(ValidationError::Oversized { size });
    }
    debug!("Size check passed: {} bytes", size);

    // 2. Detect actual mime type from file content
    let detected = detect_mime_type(file_data).ok_or(ValidationError::UnrecognizedFormat)?;
    debug!("Detected mime type: {}", detected);

    // 3. Cross-check against the client's declared type (anti-spoofing)
    if let Some(declared) = declared_type {
        if declared != detected {
            return Err(ValidationError::TypeMismatch {
                declared: declared.to_string(),
                detected,
            });
        }
        debug!("Declared type matches detected type");
    }

    // 4. Scan leading bytes for embedded script patterns
    if let Some(violation) = scan_for_suspicious_content(file_data) {
        info!("Policy scan rejected upload: {}", violation.as_str());
        return Err(ValidationError::SuspiciousContent);
    }
    debug!("Policy scan passed");

    // 5. Accept
    let hash = compute_sha256(file_data);
    info!(
        "Upload accepted: {} ({} bytes, SHA256: {})",
        detected,
        size,
        &hash[..16]
    );

    Ok(ValidatedImage {
        detected_type: detected,
        size,
        hash_sha256: hash,
    })
}

fn compute_sha256(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    fn png_buffer(total_len: usize) -> Vec<u8> {
        let mut data = PNG_SIGNATURE.to_vec();
        data.resize(total_len, 0x42);
        data
    }

    #[test]
    fn test_accepts_every_supported_format() {
        let jpeg = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
        let gif = b"GIF87a\x01\x00".to_vec();
        let webp = b"RIFF\x24\x00\x00\x00WEBPVP8 ".to_vec();

        for (data, expected) in [
            (jpeg.to_vec(), "image/jpeg"),
            (png_buffer(64), "image/png"),
            (gif, "image/gif"),
            (webp, "image/webp"),
        ] {
            let validated = validate_image(&data, None).unwrap();
            assert_eq!(validated.detected_type, expected);
            assert_eq!(validated.size, data.len());
        }
    }

    #[test]
    fn test_rejects_unrecognized_content() {
        let result = validate_image(&[0u8; 100], None);
        assert!(matches!(result, Err(ValidationError::UnrecognizedFormat)));
    }

    #[test]
    fn test_rejects_oversized_before_detection() {
        // Valid PNG signature, but one byte over the limit: the size check
        // must win, not the format check
        let data = png_buffer(MAX_IMAGE_SIZE + 1);
        let result = validate_image(&data, None);
        assert!(matches!(
            result,
            Err(ValidationError::Oversized { size }) if size == MAX_IMAGE_SIZE + 1
        ));
    }

    #[test]
    fn test_accepts_exactly_at_size_limit() {
        let data = png_buffer(MAX_IMAGE_SIZE);
        assert!(validate_image(&data, None).is_ok());
    }

    #[test]
    fn test_rejects_declared_type_mismatch() {
        let data = png_buffer(64);
        let result = validate_image(&data, Some("image/jpeg"));
        match result {
            Err(ValidationError::TypeMismatch { declared, detected }) => {
                assert_eq!(declared, "image/jpeg");
                assert_eq!(detected, "image/png");
            }
            other => panic!("expected TypeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_accepts_matching_declared_type() {
        let data = png_buffer(64);
        assert!(validate_image(&data, Some("image/png")).is_ok());
    }

    #[test]
    fn test_rejects_script_content_in_valid_image() {
        let mut data = PNG_SIGNATURE.to_vec();
        data.extend_from_slice(b"<sCrIpT>alert(1)</script>");
        let result = validate_image(&data, None);
        assert!(matches!(result, Err(ValidationError::SuspiciousContent)));
    }

    #[test]
    fn test_size_is_exact_byte_length() {
        for len in [8, 100, 4096] {
            let data = png_buffer(len);
            assert_eq!(validate_image(&data, None).unwrap().size, len);
        }
    }

    #[test]
    fn test_idempotent_verdicts() {
        let data = png_buffer(256);
        let first = validate_image(&data, Some("image/png")).unwrap();
        let second = validate_image(&data, Some("image/png")).unwrap();
        assert_eq!(first.detected_type, second.detected_type);
        assert_eq!(first.size, second.size);
        assert_eq!(first.hash_sha256, second.hash_sha256);
    }
}

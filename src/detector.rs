// ==============================================================================
// detector.rs - Magic Number Detection
// ==============================================================================
// Description: Determines true image format from file content alone
// Author: Matt Barham
// Created: 2026-03-02
// Modified: 2026-03-02
// Version: 1.0.0
// Security: Ignores filename and declared content-type entirely
// ==============================================================================

use crate::signatures::IMAGE_SIGNATURES;

/// Detect the actual mime type of a buffer from its magic number.
///
/// The catalog is scanned in declaration order and the first matching
/// descriptor wins. Buffers too short for a descriptor's span simply fail
/// that descriptor; short input never errors.
pub fn detect_mime_type(bytes: &[u8]) -> Option<&'static str> {
    IMAGE_SIGNATURES
        .iter()
        .find(|descriptor| descriptor.matches(bytes))
        .map(|descriptor| descriptor.mime_type)
}

// ==============================================================================
// signatures.rs - Image Format Signature Catalog
// ==============================================================================
// Description: Byte-level fingerprints for every accepted image format
// Author: Matt Barham
// Created: 2026-03-02
// Modified: 2026-03-02
// Version: 1.0.0
// Security: Allowlist-only formats, content judged by magic numbers alone
// ==============================================================================

/// A byte rule: `expected` must appear verbatim at `offset`.
#[derive(Debug, Clone, Copy)]
pub struct ByteRule {
    pub offset: usize,
    pub expected: &'static [u8],
}

impl ByteRule {
    /// True if the buffer contains `expected` at `offset`.
    ///
    /// A buffer too short to cover the rule's span is a non-match, never
    /// an error.
    pub fn matches(&self, bytes: &[u8]) -> bool {
        bytes
            .get(self.offset..self.offset + self.expected.len())
            .map(|window| window == self.expected)
            .unwrap_or(false)
    }
}

/// Canonical fingerprint for one accepted image format.
///
/// `signature`/`offset` is the primary magic number. Container formats with
/// a split signature (WebP inside RIFF) add `preconditions` — every rule
/// must hold for the descriptor to match.
#[derive(Debug, Clone, Copy)]
pub struct SignatureDescriptor {
    pub mime_type: &'static str,
    pub signature: &'static [u8],
    pub offset: usize,
    pub preconditions: &'static [ByteRule],
}

impl SignatureDescriptor {
    pub fn matches(&self, bytes: &[u8]) -> bool {
        let primary = ByteRule {
            offset: self.offset,
            expected: self.signature,
        };
        primary.matches(bytes) && self.preconditions.iter().all(|rule| rule.matches(bytes))
    }
}

/// Accepted formats, in detection order. Exactly one descriptor per mime
/// type; adding a format means adding one entry here.
pub const IMAGE_SIGNATURES: &[SignatureDescriptor] = &[
    SignatureDescriptor {
        mime_type: "image/jpeg",
        signature: &[0xFF, 0xD8, 0xFF],
        offset: 0,
        preconditions: &[],
    },
    SignatureDescriptor {
        mime_type: "image/png",
        signature: &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A],
        offset: 0,
        preconditions: &[],
    },
    // GIF87a or GIF89a
    SignatureDescriptor {
        mime_type: "image/gif",
        signature: b"GIF8",
        offset: 0,
        preconditions: &[],
    },
    // "WEBP" at offset 8, inside a RIFF container
    SignatureDescriptor {
        mime_type: "image/webp",
        signature: b"WEBP",
        offset: 8,
        preconditions: &[ByteRule {
            offset: 0,
            expected: b"RIFF",
        }],
    },
];

/// Human-readable list of accepted formats, for rejection messages.
pub const ACCEPTED_FORMATS: &str = "JPEG, PNG, GIF, WebP";

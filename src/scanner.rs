// ==============================================================================
// scanner.rs - Content Policy Scanner
// ==============================================================================
// Description: Screens the leading bytes of an upload for embedded script
//              or markup patterns
// Author: Matt Barham
// Created: 2026-03-02
// Modified: 2026-04-21
// Version: 1.0.0
// Security: Bounded prefix scan, lossy decode - malformed UTF-8 never errors
// ==============================================================================

use regex::RegexSet;
use std::sync::LazyLock;

/// Bytes of the file prefix that are scanned. Scanning is never extended to
/// the full file regardless of its size.
pub const SCAN_PREFIX_BYTES: usize = 1024;

/// Category of suspicious pattern found in an upload.
///
/// Categories are logged for diagnostics; the client only ever sees a
/// generic rejection message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyViolation {
    ScriptTag,
    JavascriptUri,
    HtmlDataUri,
    EventHandler,
}

impl PolicyViolation {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyViolation::ScriptTag => "script_tag",
            PolicyViolation::JavascriptUri => "javascript_uri",
            PolicyViolation::HtmlDataUri => "html_data_uri",
            PolicyViolation::EventHandler => "event_handler",
        }
    }
}

// Index order must stay aligned with VIOLATIONS below.
static SUSPICIOUS_PATTERNS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"(?i)<script",
        r"(?i)javascript:",
        r"(?i)data:text/html",
        r"(?i)on(?:click|error|load)=",
    ])
    .expect("suspicious pattern set must compile")
});

const VIOLATIONS: [PolicyViolation; 4] = [
    PolicyViolation::ScriptTag,
    PolicyViolation::JavascriptUri,
    PolicyViolation::HtmlDataUri,
    PolicyViolation::EventHandler,
];

/// Scan the first [`SCAN_PREFIX_BYTES`] of the buffer for suspicious
/// textual patterns. Returns the first matched category, or `None` if the
/// prefix is clean.
pub fn scan_for_suspicious_content(bytes: &[u8]) -> Option<PolicyViolation> {
    let prefix = &bytes[..bytes.len().min(SCAN_PREFIX_BYTES)];
    let text = String::from_utf8_lossy(prefix);

    SUSPICIOUS_PATTERNS
        .matches(&text)
        .iter()
        .next()
        .map(|index| VIOLATIONS[index])
}

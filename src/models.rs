// ==============================================================================
// models.rs - API Data Models
// ==============================================================================
// Description: Request/response models and error taxonomy for the
//              validation gateway
// Author: Matt Barham
// Created: 2026-03-02
// Modified: 2026-04-21
// Version: 1.0.0
// ==============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::signatures::ACCEPTED_FORMATS;

/// Why an upload was rejected.
///
/// The first five variants are deterministic functions of the submitted
/// bytes: resubmitting the same file yields the same rejection, so no
/// retry semantics exist anywhere. `Internal` carries server-side detail
/// that is logged but never returned to the client.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("No file provided")]
    MissingFile,

    #[error("File exceeds 5MB limit")]
    Oversized { size: usize },

    #[error("File content does not match any allowed image format ({formats})", formats = ACCEPTED_FORMATS)]
    UnrecognizedFormat,

    #[error("File content mismatch: declared as {declared} but detected as {detected}")]
    TypeMismatch {
        declared: String,
        detected: &'static str,
    },

    #[error("File contains suspicious content patterns")]
    SuspiciousContent,

    #[error("Internal validation error")]
    Internal(String),
}

/// Structured validation verdict, serialized as the response body.
///
/// Exactly one of the two shapes holds: `valid:true` with `detectedType`
/// and `size`, or `valid:false` with `error` (plus `detectedType` for the
/// type-mismatch case, so the client can report what the file really is).
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VerdictResponse {
    pub fn accepted(detected_type: &str, size: usize) -> Self {
        Self {
            valid: true,
            detected_type: Some(detected_type.to_string()),
            size: Some(size),
            error: None,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            detected_type: None,
            size: None,
            error: Some(error.into()),
        }
    }

    pub fn rejected_with_type(error: impl Into<String>, detected_type: &str) -> Self {
        Self {
            valid: false,
            detected_type: Some(detected_type.to_string()),
            size: None,
            error: Some(error.into()),
        }
    }
}

/// API information response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiInfoResponse {
    pub service: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

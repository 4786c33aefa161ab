// ==============================================================================
// handlers.rs - API Request Handlers
// ==============================================================================
// Description: HTTP request handlers for the image validation gateway
// Author: Matt Barham
// Created: 2026-03-02
// Modified: 2026-04-21
// Version: 1.0.0
// ==============================================================================

use axum::{
    extract::Multipart,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use tracing::{error, info, warn};

use crate::{
    models::{ApiInfoResponse, HealthResponse, ValidationError, VerdictResponse},
    validator::validate_image,
};

/// Root endpoint - API information
pub async fn root() -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse {
        service: "Image Validation Gateway".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: vec![
            "/api/images/health - Health check".to_string(),
            "/api/images/validate - Validate uploaded image (POST)".to_string(),
        ],
    })
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

/// Validate an uploaded image.
///
/// Accepts multipart/form-data with a required binary `file` field and an
/// optional `declaredType` text field (the content type the client claims
/// the file to be). The verdict is authoritative: callers must not commit
/// the file to storage on any `valid:false` or non-2xx response.
pub async fn validate_upload(
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<VerdictResponse>), ValidationError> {
    let mut file_data: Option<axum::body::Bytes> = None;
    let mut declared_type: Option<String> = None;

    // Multipart decode failures are internal faults: the client gets a
    // generic message, the detail only goes to the log
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ValidationError::Internal(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                let data = field.bytes().await.map_err(|e| {
                    ValidationError::Internal(format!("Failed to read file field: {}", e))
                })?;
                file_data = Some(data);
            }

            "declaredType" => {
                let value = field.text().await.map_err(|e| {
                    ValidationError::Internal(format!("Failed to read declaredType field: {}", e))
                })?;
                // An empty declared type is treated as absent, not mismatched
                let value = value.trim();
                if !value.is_empty() {
                    declared_type = Some(value.to_string());
                }
            }

            _ => {
                warn!("Unknown multipart field: {}", name);
            }
        }
    }

    let file_data = file_data.ok_or(ValidationError::MissingFile)?;

    let validated = validate_image(&file_data, declared_type.as_deref())?;

    Ok((
        StatusCode::OK,
        Json(VerdictResponse::accepted(
            validated.detected_type,
            validated.size,
        )),
    ))
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let status = match &self {
            ValidationError::Internal(detail) => {
                error!("Internal validation error: {}", detail);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            other => {
                info!("Upload rejected: {}", other);
                StatusCode::BAD_REQUEST
            }
        };

        let body = match &self {
            // Mismatch verdicts carry the detected type so the client can
            // report what the file really is
            ValidationError::TypeMismatch { detected, .. } => {
                VerdictResponse::rejected_with_type(self.to_string(), detected)
            }
            _ => VerdictResponse::rejected(self.to_string()),
        };

        (status, Json(body)).into_response()
    }
}

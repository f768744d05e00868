//! HTTP request handlers.

use super::types::{validate_local_part, CheckEmailRequest, CheckResult, HealthResponse};
use super::AppState;
use crate::error::ServiceError;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    Json,
};
use tracing::{info, warn};

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// Check whether a Gmail username is already taken.
pub async fn check_email(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<CheckResult>, ServiceError> {
    let request = parse_check_request(&headers, &body)?;
    let local_part = validate_local_part(request.local_part()).map_err(ServiceError::Validation)?;

    let result = state
        .probe
        .check_availability(local_part)
        .await
        .map_err(|e| {
            warn!(local_part = %local_part, error = %e, "Email check failed");
            ServiceError::from(e)
        })?;

    info!(
        email = %result.email,
        is_registered = result.is_registered,
        "Email check answered"
    );
    Ok(Json(result))
}

/// Decode the request body as JSON. A missing `Content-Type` is treated as
/// JSON; a declared non-JSON type is rejected.
fn parse_check_request(headers: &HeaderMap, body: &[u8]) -> Result<CheckEmailRequest, ServiceError> {
    if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
        let is_json = content_type
            .to_str()
            .ok()
            .and_then(|value| value.split(';').next())
            .map(|essence| {
                let essence = essence.trim().to_ascii_lowercase();
                essence == "application/json" || essence.ends_with("+json")
            })
            .unwrap_or(false);

        if !is_json {
            return Err(ServiceError::Validation(
                "Expected request with `Content-Type: application/json`".to_string(),
            ));
        }
    }

    Ok(serde_json::from_slice(body)?)
}

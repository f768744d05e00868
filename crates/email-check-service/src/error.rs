//! Error types for the email check service.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use gxlu_client::ProbeError;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Service error types.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("Failed to check email: {0}")]
    Probe(String),

    #[error("Rate limit exceeded, retry in {}s", retry_after_secs(.retry_after))]
    RateLimited { retry_after: Duration },
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub code: String,
}

/// Whole seconds for `Retry-After`, rounded up and never zero.
fn retry_after_secs(wait: &Duration) -> u64 {
    let secs = wait.as_secs() + u64::from(wait.subsec_nanos() > 0);
    secs.max(1)
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ServiceError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_FAILED"),
            ServiceError::Probe(_) => (StatusCode::INTERNAL_SERVER_ERROR, "PROBE_FAILED"),
            ServiceError::RateLimited { .. } => (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMIT_EXCEEDED"),
        };

        let body = ErrorResponse {
            detail: self.to_string(),
            code: code.to_string(),
        };

        let mut response = (status, Json(body)).into_response();
        if let ServiceError::RateLimited { retry_after } = self {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(retry_after_secs(&retry_after)));
        }
        response
    }
}

impl From<ProbeError> for ServiceError {
    fn from(e: ProbeError) -> Self {
        if e.is_rejected_input() {
            ServiceError::Validation(e.to_string())
        } else {
            ServiceError::Probe(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> Self {
        ServiceError::Validation(format!("Invalid request body: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (ServiceError::Validation("bad".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (ServiceError::Probe("dns".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (
                ServiceError::RateLimited { retry_after: Duration::from_secs(3) },
                StatusCode::TOO_MANY_REQUESTS,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_check_failure_message_carries_cause() {
        let error = ServiceError::Probe("connection refused".into());
        assert_eq!(error.to_string(), "Failed to check email: connection refused");
    }

    #[test]
    fn test_empty_local_part_maps_to_validation() {
        let error = ServiceError::from(ProbeError::EmptyLocalPart);
        assert!(matches!(error, ServiceError::Validation(_)));
    }

    #[test]
    fn test_retry_after_rounds_up() {
        assert_eq!(retry_after_secs(&Duration::ZERO), 1);
        assert_eq!(retry_after_secs(&Duration::from_millis(200)), 1);
        assert_eq!(retry_after_secs(&Duration::from_secs(2)), 2);
        assert_eq!(retry_after_secs(&Duration::from_millis(2001)), 3);

        let response = ServiceError::RateLimited {
            retry_after: Duration::from_millis(59_500),
        }
        .into_response();
        assert_eq!(response.headers()[header::RETRY_AFTER], "60");
    }
}

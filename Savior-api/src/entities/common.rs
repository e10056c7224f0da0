use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::ValidationErrors;

use savior_domain::services::VitalsServiceError;

/// Error response format for API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type/code - machine-readable identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional details about the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a not found error response
    pub fn not_found(resource: &str) -> Self {
        Self {
            error: "not_found".to_string(),
            message: format!("The requested {} could not be found", resource),
            details: None,
        }
    }

    /// Create a validation error response
    pub fn validation_error(message: &str, details: Option<serde_json::Value>) -> Self {
        Self {
            error: "validation_error".to_string(),
            message: message.to_string(),
            details,
        }
    }

    /// Create a bad request error response
    pub fn bad_request(message: &str) -> Self {
        Self {
            error: "bad_request".to_string(),
            message: message.to_string(),
            details: None,
        }
    }

    /// Create an internal error response
    pub fn internal_error() -> Self {
        Self {
            error: "internal_error".to_string(),
            message: "An unexpected error occurred".to_string(),
            details: None,
        }
    }

    fn status(&self) -> StatusCode {
        match self.error.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "validation_error" | "bad_request" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

impl From<VitalsServiceError> for ErrorResponse {
    fn from(err: VitalsServiceError) -> Self {
        match err {
            VitalsServiceError::Validation(message) => Self::validation_error(&message, None),
            other => Self::bad_request(&other.to_string()),
        }
    }
}

impl From<ValidationErrors> for ErrorResponse {
    fn from(errors: ValidationErrors) -> Self {
        let details = serde_json::to_value(errors.field_errors()).ok();
        Self::validation_error("Request failed validation", details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ErrorResponse::not_found("alert").into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorResponse::bad_request("x").into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorResponse::validation_error("x", None).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorResponse::internal_error().into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_from_service_error() {
        let response = ErrorResponse::from(VitalsServiceError::UnknownTimeRange("1y".to_string()));
        assert_eq!(response.error, "bad_request");
        assert!(response.message.contains("1y"));

        let response = ErrorResponse::from(VitalsServiceError::Validation("bad".to_string()));
        assert_eq!(response.error, "validation_error");
    }
}

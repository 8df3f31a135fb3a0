//! Error handling for the Fokal server

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fokal::FokalError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// API error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Server error types
#[derive(Debug, Error)]
pub enum ServerError {
    /// Fokal library error, message passed through unchanged
    #[error(transparent)]
    Fokal(#[from] FokalError),

    /// Not found error
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request error
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ServerError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Fokal(FokalError::InvalidParameter(_)) | ServerError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            ServerError::Fokal(FokalError::InvalidParameter(_)) => "invalid_parameter",
            ServerError::Fokal(FokalError::Signal { .. }) => "signal_error",
            ServerError::Fokal(FokalError::NotFound(_)) => "hydration_error",
            ServerError::Fokal(_) => "fokal_error",
            ServerError::NotFound(_) => "not_found",
            ServerError::BadRequest(_) => "bad_request",
            ServerError::Internal(_) => "internal_error",
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ServerError::Fokal(FokalError::Signal { signal, .. }) => {
                Some(serde_json::json!({ "signal": signal }))
            }
            ServerError::Fokal(FokalError::NotFound(id)) => Some(serde_json::json!({ "id": id })),
            _ => None,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let error_response = ErrorResponse {
            error: self.error_type().to_string(),
            message: self.to_string(),
            details: self.details(),
        };

        (status, Json(error_response)).into_response()
    }
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;

/// Helper function to create a not found error
pub fn not_found(resource: &str, id: &str) -> ServerError {
    ServerError::NotFound(format!("{} with id '{}' not found", resource, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fokal::search::SignalKind;

    #[test]
    fn test_invalid_parameter_is_bad_request() {
        let err = ServerError::from(FokalError::InvalidParameter("lat must be a number".into()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_type(), "invalid_parameter");
        assert_eq!(err.to_string(), "Invalid parameter: lat must be a number");
    }

    #[test]
    fn test_upstream_failures_are_internal() {
        let signal = ServerError::from(FokalError::Signal {
            signal: SignalKind::Geo,
            message: "timeout".into(),
        });
        assert_eq!(signal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(signal.to_string(), "geo signal failed: timeout");
        assert_eq!(signal.details(), Some(serde_json::json!({ "signal": "geo" })));

        let hydration = ServerError::from(FokalError::NotFound(7));
        assert_eq!(hydration.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_helper() {
        let err = not_found("Photo", "42");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Resource not found: Photo with id '42' not found");
    }
}

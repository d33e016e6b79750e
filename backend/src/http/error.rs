//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::error;
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid query parameter
    BadRequest(String),
    /// View-model error
    Dashboard(DashboardError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg)),
            AppError::Dashboard(e) => {
                error!("View computation failed: {}", e);
                let api_error = match &e {
                    DashboardError::Schema { context, .. } => {
                        ApiError::new("DATA_CONTRACT", e.to_string()).with_details(context.to_string())
                    }
                    DashboardError::UnrecognizedMonth { .. } => {
                        ApiError::new("UNRECOGNIZED_MONTH", e.to_string())
                    }
                    DashboardError::DivisionUndefined { .. } => {
                        ApiError::new("DIVISION_UNDEFINED", e.to_string())
                    }
                    DashboardError::Io { .. } | DashboardError::Configuration(_) => {
                        ApiError::new("INTERNAL_ERROR", e.to_string())
                    }
                };
                (StatusCode::INTERNAL_SERVER_ERROR, api_error)
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        AppError::Dashboard(err)
    }
}

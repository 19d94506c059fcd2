use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use road_graph::models::RouteError;
use thiserror::Error;

/// Request-level failures, rendered as `{"error": message}`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid road or vehicle type")]
    InvalidVehicleRequest,

    #[error("Invalid road names")]
    InvalidRoute,

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error(transparent)]
    RouteSearch(#[from] RouteError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidVehicleRequest | ApiError::InvalidRoute | ApiError::MalformedRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::RouteSearch(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("{self}");
        }
        HttpResponse::build(self.status_code()).json(serde_json::json!({ "error": self.to_string() }))
    }
}

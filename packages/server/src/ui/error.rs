//! HTTP error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    infrastructure::dto::http::ErrorResponse,
    usecase::{GetRoomDetailError, LookupError, PlanError},
};

/// Error returned by HTTP handlers, rendered as `{"message": ...}`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadGateway(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<PlanError> for ApiError {
    fn from(error: PlanError) -> Self {
        match error {
            PlanError::UserNotFound(_) => ApiError::Unauthorized(error.to_string()),
            PlanError::MissingGoal => ApiError::BadRequest(error.to_string()),
        }
    }
}

impl From<LookupError> for ApiError {
    fn from(error: LookupError) -> Self {
        match error {
            LookupError::EmptyQuery(_) => ApiError::BadRequest(error.to_string()),
            LookupError::Exhausted(_) | LookupError::Upstream(_) => {
                tracing::warn!("Upstream lookup failed: {}", error);
                ApiError::BadGateway(error.to_string())
            }
        }
    }
}

impl From<GetRoomDetailError> for ApiError {
    fn from(error: GetRoomDetailError) -> Self {
        match error {
            GetRoomDetailError::InvalidRoomId(_) => ApiError::BadRequest(error.to_string()),
            GetRoomDetailError::RoomNotFound(_) => ApiError::NotFound(error.to_string()),
        }
    }
}

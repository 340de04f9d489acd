//! HTTP error mapping
//!
//! Every handler returns `ApiError` on the failure path, so status codes and
//! body shape stay consistent across routes. Board errors keep their
//! taxonomy: a missing unit is the client's problem (404), a store failure
//! is an upstream problem (502).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::domains::housekeeping::BoardError;

/// Errors a route handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request itself was malformed: unknown status value, unknown unit
    /// kind, unparseable ID.
    #[error("{0}")]
    BadRequest(String),

    /// The request was well-formed JSON but a required field was missing.
    #[error("{0}")]
    UnprocessableEntity(String),

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Board(BoardError::UnitNotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Board(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, status = %status, "request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "request rejected");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RoomId;
    use crate::domains::housekeeping::board::UnitRef;

    fn status_of(error: ApiError) -> StatusCode {
        error.into_response().status()
    }

    #[test]
    fn bad_request_maps_to_400() {
        assert_eq!(
            status_of(ApiError::BadRequest("nope".to_string())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn missing_unit_maps_to_404() {
        let error = ApiError::from(BoardError::not_found(UnitRef::Room(RoomId::from_i64(99))));
        assert_eq!(status_of(error), StatusCode::NOT_FOUND);
    }

    #[test]
    fn load_failure_maps_to_502() {
        let error = ApiError::from(BoardError::load(anyhow::anyhow!("store down")));
        assert_eq!(status_of(error), StatusCode::BAD_GATEWAY);
    }
}

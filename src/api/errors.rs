use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::transfer::TransferError;

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 401 Unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Creates a 503 Service Unavailable error
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<TransferError> for ApiError {
    fn from(err: TransferError) -> Self {
        use TransferError::*;

        match err {
            NotOwner | BuyerTeamNotFound | PlayerNotFound => Self::not_found(err.to_string()),
            InvalidPrice | AlreadyListed | NotListed | RosterFull | PlayerNotForSale
            | SelfTrade | SellerRosterAtFloor | InsufficientFunds => {
                Self::bad_request(err.to_string())
            }
            TransientStore(_) => Self::service_unavailable(err.to_string()),
            Store(ref cause) => {
                tracing::error!(error = %cause, "storage failure surfaced to the API");
                Self::internal_server_error("Storage error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_failures_map_to_bad_request() {
        for err in [
            TransferError::InvalidPrice,
            TransferError::AlreadyListed,
            TransferError::RosterFull,
            TransferError::SelfTrade,
            TransferError::SellerRosterAtFloor,
            TransferError::InsufficientFunds,
            TransferError::PlayerNotForSale,
        ] {
            assert_eq!(ApiError::from(err).status, StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn missing_entities_map_to_not_found() {
        for err in [
            TransferError::NotOwner,
            TransferError::BuyerTeamNotFound,
            TransferError::PlayerNotFound,
        ] {
            assert_eq!(ApiError::from(err).status, StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn transient_conflicts_map_to_service_unavailable() {
        let err = TransferError::TransientStore(sqlx::Error::PoolTimedOut);
        assert_eq!(ApiError::from(err).status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn plain_store_failures_map_to_internal_error() {
        let err = TransferError::Store(sqlx::Error::RowNotFound);
        assert_eq!(
            ApiError::from(err).status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

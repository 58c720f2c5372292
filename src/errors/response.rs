use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::errors::AppError;

// The IntoResponse trait implementation converts AppError into a well-formed
// HTTP response with an {"error": ...} JSON body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            // Missing entities are not-found errors
            AppError::UserNotFound | AppError::TodoNotFound => StatusCode::NOT_FOUND,

            // Malformed or conflicting input is a bad request
            AppError::UsernameTaken | AppError::InvalidTodoId | AppError::AlreadyPro => {
                StatusCode::BAD_REQUEST
            }

            // The free-plan quota is a forbidden error
            AppError::QuotaExceeded => StatusCode::FORBIDDEN,
        };

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_missing_entities_to_404() {
        assert_eq!(
            AppError::UserNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::TodoNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn maps_bad_input_to_400() {
        assert_eq!(
            AppError::UsernameTaken.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidTodoId.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::AlreadyPro.into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn maps_quota_to_403() {
        assert_eq!(
            AppError::QuotaExceeded.into_response().status(),
            StatusCode::FORBIDDEN
        );
    }
}

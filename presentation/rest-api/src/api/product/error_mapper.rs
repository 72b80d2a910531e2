use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, detail) = match &self {
            ProductError::InvalidQuery { parameter } => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                Some(parameter.clone()),
            ),
            ProductError::InvalidProductId => {
                (StatusCode::BAD_REQUEST, "ValidationError", Some("productId".to_string()))
            }
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", None),
            ProductError::InvalidPrice | ProductError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError", None)
            }
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
                detail,
            }),
        )
    }
}

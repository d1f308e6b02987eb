use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use common::{
    error::{PersistenceError, ValidationError},
    models::ErrorResponse,
};
use thiserror::Error;

/// Every way a contact request can fail, with its status code and label.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Only POST and PUT methods are accepted.")]
    MethodNotAllowed,

    #[error("Content-type must be application/json!")]
    UnsupportedMediaType,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Cannot create a contact with identical id to existing contact!")]
    DuplicateContact,

    // 501 with a "Service Unavailable" label, as existing clients expect.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::MethodNotAllowed => "Method Not Allowed",
            ApiError::UnsupportedMediaType => "Unsupported Media Type",
            ApiError::Validation(_) => "Bad Request",
            ApiError::DuplicateContact => "Forbidden",
            ApiError::Persistence(_) => "Service Unavailable",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::DuplicateContact => StatusCode::FORBIDDEN,
            ApiError::Persistence(_) => StatusCode::NOT_IMPLEMENTED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
        })
    }
}

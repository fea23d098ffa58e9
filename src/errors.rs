use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::MalformedReference(_) | DomainError::ReferenceNotFound(_) => {
                AppError::BadRequest(e.to_string())
            }
            DomainError::InvalidInput(msg) => AppError::Validation(msg),
            DomainError::StoreUnavailable(_) | DomainError::Internal(_) => {
                AppError::Internal(e.to_string())
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": msg
            })),
            AppError::Validation(msg) => {
                HttpResponse::UnprocessableEntity().json(serde_json::json!({
                    "error": msg
                }))
            }
            AppError::Internal(detail) => {
                log::error!("{}", detail);
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "Internal server error"
                }))
            }
        }
    }
}

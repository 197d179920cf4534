use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0:?}")]
    Validation(Vec<String>),
}

/// Wire shape shared by every 4xx response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub detail: ErrorDetail,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Messages(Vec<String>),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorDetail::Message(msg)),
            AppError::InvalidReference(msg) => (StatusCode::BAD_REQUEST, ErrorDetail::Message(msg)),
            AppError::Conflict(msg) => (StatusCode::BAD_REQUEST, ErrorDetail::Message(msg)),
            AppError::Validation(messages) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorDetail::Messages(messages),
            ),
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |error| match &error.message {
                    Some(message) => format!("{}: {}", field, message),
                    None => format!("{}: invalid value", field),
                })
            })
            .collect();
        // field_errors() iterates in hash order
        messages.sort();

        AppError::Validation(messages)
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use paysplit_core::errors::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{}", .0.body_text())]
    Rejected(#[from] JsonRejection),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Core(e) => match e {
                CoreError::Validation(_) => (StatusCode::BAD_REQUEST, e.to_string()),
                CoreError::MalformedBucket(_) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
                CoreError::Calculation(_) => (StatusCode::BAD_REQUEST, e.to_string()),
            },
            ApiError::Rejected(rejection) => (rejection.status(), rejection.body_text()),
        };
        tracing::warn!("Request rejected with {}: {}", status, msg);
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::TranslateError;

pub static INVALID_REQUEST: &str = "400-001";
pub static UNKNOWN_ROUTE: &str = "404-001";
pub static INFERENCE_FAILED: &str = "502-001";
pub static UNREADABLE_TRANSLATION: &str = "502-002";

#[derive(Debug)]
pub enum ApiError {
    ClientError { code: &'static str, message: String },
    UpstreamError { code: &'static str, message: String },
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "400-001")]
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, code, message) = match self {
            ApiError::ClientError { code, message } => {
                (StatusCode::BAD_REQUEST, code, message)
            }
            ApiError::UpstreamError { code, message } => {
                (StatusCode::BAD_GATEWAY, code, message)
            }
        };

        let body = ErrorBody {
            code: code.to_string(),
            message,
        };
        (status_code, Json(body)).into_response()
    }
}

impl From<TranslateError> for ApiError {
    fn from(e: TranslateError) -> Self {
        match e {
            TranslateError::Validation(message) => ApiError::ClientError {
                code: INVALID_REQUEST,
                message,
            },
            TranslateError::Inference(_) => ApiError::UpstreamError {
                code: INFERENCE_FAILED,
                message: "translation backend is unavailable".to_string(),
            },
            TranslateError::ResponseParse { .. } => ApiError::UpstreamError {
                code: UNREADABLE_TRANSLATION,
                message: "translation backend returned an unreadable result"
                    .to_string(),
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::ClientError {
            code: INVALID_REQUEST,
            message: rejection.body_text(),
        }
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

use axum::{http::StatusCode, Json};

use crate::response::{ErrorBody, UNKNOWN_ROUTE};

pub(super) async fn get_404() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            code: UNKNOWN_ROUTE.to_string(),
            message: "no such route".to_string(),
        }),
    )
}

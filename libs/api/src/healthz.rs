use axum::{extract::State, Json};
use openai::models::list_models::ListModels;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::{ApiState, Backend};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: Status,
}

/// Lists models on the backend. Any failure is absorbed into `Status::Error`.
pub async fn check_health<B: ListModels>(backend: &B) -> HealthStatus {
    let status = match backend.list_models().await {
        Ok(_) => Status::Ok,
        Err(e) => {
            error!(task = "check health", error = format!("{:#}", e));
            Status::Error
        }
    };

    HealthStatus { status }
}

/// Report backend reachability
#[utoipa::path(
    get,
    path = "/healthcheck",
    tag = "translate",
    responses(
        (status = 200, description = "Backend reachability, always 200", body = HealthStatus)
    )
)]
pub async fn get_health<B: Backend>(
    State(state): State<ApiState<B>>,
) -> Json<HealthStatus> {
    Json(check_health(&state.backend).await)
}

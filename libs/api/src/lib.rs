use std::time::Duration;

use anyhow::Context;
use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use openai::models::{
    chat_completion::ChatCompletion, list_models::ListModels, Models,
    DEFAULT_BASE_URL,
};
use serde::Deserialize;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub mod error;
pub mod healthz;
pub mod not_found;
pub mod response;
pub mod translate;

#[cfg(test)]
mod fake;

/// Anything that can serve translations and answer the liveness probe.
pub trait Backend:
    ChatCompletion + ListModels + Clone + Send + Sync + 'static
{
}

impl<T> Backend for T where
    T: ChatCompletion + ListModels + Clone + Send + Sync + 'static
{
}

#[derive(Clone, Debug)]
pub struct ApiState<B> {
    backend: B,
    openai: OpenAi,
}

impl<B> ApiState<B> {
    pub fn new(backend: B, openai: OpenAi) -> Self {
        Self { backend, openai }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub openai: OpenAi,
    #[serde(default)]
    pub server: Server,
}

/// Backend location and the sampling parameters sent with every completion.
#[derive(Clone, Debug, Deserialize)]
pub struct OpenAi {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    #[serde(default)]
    pub frequency_penalty: f32,
    #[serde(default)]
    pub presence_penalty: f32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Server {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            port: default_port(),
            allowed_origins: Vec::new(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_temperature() -> f32 {
    0.5
}

fn default_max_tokens() -> u32 {
    4096
}

fn default_top_p() -> f32 {
    1.0
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_port() -> u16 {
    8000
}

#[derive(OpenApi)]
#[openapi(
    paths(translate::post_translate, healthz::get_health),
    components(schemas(
        translate::request::TranslationRequest,
        translate::request::TranslationEntry,
        translate::response::TranslationResponse,
        translate::response::TranslatedEntry,
        healthz::HealthStatus,
        healthz::Status,
        response::ErrorBody,
    )),
    tags(
        (name = "translate", description = "Key/value string translation API")
    )
)]
pub struct ApiDoc;

pub fn serve(config: Config, api_key: &str) -> anyhow::Result<Router> {
    info!(
        task = "start api serving",
        model = %config.openai.model,
        base_url = %config.openai.base_url,
    );

    let models = Models::new(
        &config.openai.base_url,
        api_key,
        Duration::from_secs(config.openai.timeout_secs),
    )?;

    let origins = config
        .server
        .allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .context("invalid allowed origin")?;

    Ok(router(ApiState::new(models, config.openai), origins))
}

pub fn router<B: Backend>(
    state: ApiState<B>,
    origins: Vec<HeaderValue>,
) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .route("/healthcheck", get(healthz::get_health::<B>))
        .route("/translate", post(translate::post_translate::<B>))
        .layer(cors)
        .fallback(not_found::get_404)
        .with_state(state)
}

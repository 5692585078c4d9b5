use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;
use openai::models::chat_completion::{
    ChatCompletion, ChatCompletionRequest, Message,
};
use serde_json::Value;
use tracing::{error, info, warn};

pub mod parse;
pub mod prompt;
pub mod request;
pub mod response;

use crate::{
    error::TranslateError,
    response::{ApiError, ApiResponse, ErrorBody},
    ApiState, Backend, OpenAi,
};

use self::{
    parse::{parse_completion, Parsed},
    request::{validate, TranslationRequest},
    response::{TranslatedEntry, TranslationResponse},
};

/// Translate a set of key/value strings
#[utoipa::path(
    post,
    path = "/translate",
    tag = "translate",
    request_body = TranslationRequest,
    responses(
        (status = 200, description = "Translated successfully", body = TranslationResponse),
        (status = 400, description = "Request does not match the schema", body = ErrorBody),
        (status = 502, description = "Backend failed or replied with an unreadable result", body = ErrorBody)
    )
)]
pub async fn post_translate<B: Backend>(
    State(state): State<ApiState<B>>,
    WithRejection(Json(raw), _): WithRejection<Json<Value>, ApiError>,
) -> ApiResponse<Json<TranslationResponse>> {
    let request = validate(raw)?;
    let response = translate(&state.backend, &state.openai, &request).await?;

    Ok(Json(response))
}

/// Builds the prompt, calls the backend once and reads its reply back into
/// typed entries. Nothing is retried and nothing partial is returned.
pub async fn translate<B: ChatCompletion + Sync>(
    backend: &B,
    openai: &OpenAi,
    request: &TranslationRequest,
) -> Result<TranslationResponse, TranslateError> {
    if request.entries.is_empty() {
        return Ok(TranslationResponse {
            entries: Vec::new(),
        });
    }

    info!(
        task = "translate",
        language_from = %request.language_from,
        language_to = %request.language_to,
        entries = request.entries.len(),
    );

    let completion = ChatCompletionRequest {
        model: openai.model.clone(),
        messages: vec![
            Message::system(prompt::build_system_prompt(
                &request.language_from,
                &request.language_to,
            )),
            Message::user(prompt::build_user_prompt(&request.entries)),
        ],
        temperature: Some(openai.temperature),
        max_tokens: Some(openai.max_tokens),
        top_p: Some(openai.top_p),
        frequency_penalty: Some(openai.frequency_penalty),
        presence_penalty: Some(openai.presence_penalty),
    };

    let response = backend.chat_completion(completion).await.map_err(|e| {
        error!(task = "chat completion", error = format!("{:#}", e));
        TranslateError::Inference(e)
    })?;

    match parse_completion(response.content()) {
        Parsed::Entries(entries) => {
            check_shape(request, &entries);
            Ok(TranslationResponse { entries })
        }
        Parsed::Malformed { reason, raw } => {
            error!(task = "parse completion", reason = %reason, raw = %raw);
            Err(TranslateError::ResponseParse { reason, raw })
        }
    }
}

// Count and key order are what the prompt asks for; a backend that ignores
// it is logged, not rejected.
fn check_shape(request: &TranslationRequest, entries: &[TranslatedEntry]) {
    let same_keys = request.entries.len() == entries.len()
        && request
            .entries
            .iter()
            .zip(entries)
            .all(|(sent, received)| sent.key == received.key);

    if !same_keys {
        warn!(
            task = "check shape",
            sent = request.entries.len(),
            received = entries.len(),
            "backend did not preserve entry keys"
        );
    }
}

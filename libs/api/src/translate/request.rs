use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::TranslateError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TranslationRequest {
    #[schema(min_length = 1, pattern = r"\S", example = "en")]
    pub language_from: String,
    #[schema(min_length = 1, pattern = r"\S", example = "fr")]
    pub language_to: String,
    #[serde(rename = "strings")]
    pub entries: Vec<TranslationEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct TranslationEntry {
    #[schema(example = "greeting")]
    pub key: String,
    #[schema(example = "Hello")]
    pub value: String,
}

/// Checks a raw payload against the request schema. Entries are kept in
/// order; duplicate keys pass through.
pub fn validate(raw: Value) -> Result<TranslationRequest, TranslateError> {
    let request = serde_json::from_value::<TranslationRequest>(raw)
        .map_err(|e| TranslateError::Validation(e.to_string()))?;

    ensure_language("languageFrom", &request.language_from)?;
    ensure_language("languageTo", &request.language_to)?;

    Ok(request)
}

fn ensure_language(field: &str, tag: &str) -> Result<(), TranslateError> {
    if tag.trim().is_empty() {
        return Err(TranslateError::Validation(format!(
            "{} must not be empty",
            field
        )));
    }

    Ok(())
}

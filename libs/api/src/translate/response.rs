use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TranslationResponse {
    #[serde(rename = "strings")]
    pub entries: Vec<TranslatedEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TranslatedEntry {
    #[schema(example = "greeting")]
    pub key: String,
    #[schema(example = "Bonjour")]
    pub value: String,
    /// Only set when the backend was unsure about the translation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

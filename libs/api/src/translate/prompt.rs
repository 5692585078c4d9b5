use serde_json::{json, Value};

use super::request::TranslationEntry;

pub static SYSTEM_PROMPT_TEMPLATE: &str = "You are a professional translator. \
The user message is a JSON array of objects with a \"key\" and a \"value\". \
Translate every \"value\" from {language_from} to {language_to}. \
Reply with a JSON array of the same length and order, keeping every \"key\" unchanged: \
[{\"key\": string, \"value\": string}]. \
Only when you are not confident in a translation, add a \"comment\" string to that object explaining why. \
Output nothing but the JSON array: no explanations, no surrounding text, no markdown code fences.";

pub fn build_system_prompt(language_from: &str, language_to: &str) -> String {
    SYSTEM_PROMPT_TEMPLATE
        .replace("{language_from}", language_from)
        .replace("{language_to}", language_to)
}

/// Compact JSON array of the entries, sent as the user turn.
pub fn build_user_prompt(entries: &[TranslationEntry]) -> String {
    entries
        .iter()
        .map(|entry| json!({"key": entry.key, "value": entry.value}))
        .collect::<Value>()
        .to_string()
}

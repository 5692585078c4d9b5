use super::response::TranslatedEntry;

/// Outcome of reading the backend's free text as a translation array.
#[derive(Debug, PartialEq, Eq)]
pub enum Parsed {
    Entries(Vec<TranslatedEntry>),
    Malformed { reason: String, raw: String },
}

pub fn parse_completion(content: Option<&str>) -> Parsed {
    let raw = content.unwrap_or_default();
    if raw.trim().is_empty() {
        return Parsed::Malformed {
            reason: "empty response".to_string(),
            raw: raw.to_string(),
        };
    }

    match serde_json::from_str::<Vec<TranslatedEntry>>(raw) {
        Ok(entries) => Parsed::Entries(entries),
        Err(e) => Parsed::Malformed {
            reason: e.to_string(),
            raw: raw.to_string(),
        },
    }
}

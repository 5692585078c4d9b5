use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    /// The payload did not satisfy the request schema.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The backend call itself failed: transport, status or envelope.
    #[error("inference backend request failed: {0:#}")]
    Inference(anyhow::Error),

    /// The backend answered, but not with a translation array. `raw` keeps
    /// the reply for logs and must not reach the caller.
    #[error("could not parse backend response: {reason}")]
    ResponseParse { reason: String, raw: String },
}

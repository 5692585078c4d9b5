use std::time::Duration;

use anyhow::Context;
use openai::models::{
    chat_completion::{ChatCompletion, ChatCompletionRequest, Message},
    Models, DEFAULT_BASE_URL,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let secrets = util::load_env("Secrets.dev.toml")?;

    let api_key = secrets
        .get("OPENAI_API_KEY")
        .and_then(|v| v.as_str())
        .context("OPENAI_API_KEY was not found")?;

    let models = Models::new(DEFAULT_BASE_URL, api_key, Duration::from_secs(60))?;

    let result = models
        .chat_completion(ChatCompletionRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![
                Message::system("Translate the user's text from en to fr."),
                Message::user("Hello World!"),
            ],
            temperature: Some(0.5),
            max_tokens: Some(256),
            top_p: None,
            frequency_penalty: None,
            presence_penalty: None,
        })
        .await?;

    println!("{:?}", result.content());

    Ok(())
}

use anyhow::Context;

use crate::models::Models;

use super::{ChatCompletion, ChatCompletionRequest, ChatCompletionResponse};

static CHAT_COMPLETIONS: &str = "chat/completions";

impl ChatCompletion for Models {
    async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> anyhow::Result<ChatCompletionResponse> {
        let body = serde_json::to_string(&request)
            .context("failed to serialize request")?;
        let text = self.post(body, CHAT_COMPLETIONS).await?;

        let response =
            serde_json::from_str(&text).context("failed to parse response")?;

        Ok(response)
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use httpmock::prelude::*;
    use serde_json::json;

    use crate::models::{
        chat_completion::{ChatCompletion, ChatCompletionRequest, Message},
        Models,
    };

    fn request() -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![
                Message::system("translate"),
                Message::user("[]"),
            ],
            temperature: Some(0.5),
            max_tokens: Some(256),
            top_p: None,
            frequency_penalty: Some(0.0),
            presence_penalty: Some(0.0),
        }
    }

    #[tokio::test]
    async fn test_chat_completion() {
        // Arrange
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/chat/completions")
                    .header("authorization", "Bearer sk-test")
                    .json_body_partial(
                        r#"{"model":"gpt-4o-mini","temperature":0.5,"max_tokens":256}"#,
                    );
                then.status(200).json_body(json!({
                    "id": "chatcmpl-1",
                    "object": "chat.completion",
                    "choices": [{
                        "index": 0,
                        "message": {"role": "assistant", "content": "[]"},
                        "finish_reason": "stop"
                    }]
                }));
            })
            .await;
        let models =
            Models::new(&server.base_url(), "sk-test", Duration::from_secs(5))
                .unwrap();

        // Act
        let response = models.chat_completion(request()).await;

        // Assert
        mock.assert_async().await;
        let response = response.unwrap();
        assert_eq!(response.content(), Some("[]"));
    }

    #[tokio::test]
    async fn test_chat_completion_omits_unset_parameters() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/chat/completions")
                    .matches(|req| {
                        let body = req.body.as_deref().unwrap_or_default();
                        !String::from_utf8_lossy(body).contains("top_p")
                    });
                then.status(200).json_body(json!({"choices": []}));
            })
            .await;
        let models =
            Models::new(&server.base_url(), "sk-test", Duration::from_secs(5))
                .unwrap();

        let response = models.chat_completion(request()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.content(), None);
    }

    #[tokio::test]
    async fn test_chat_completion_error_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(429).body("rate limited");
            })
            .await;
        let models =
            Models::new(&server.base_url(), "sk-test", Duration::from_secs(5))
                .unwrap();

        let response = models.chat_completion(request()).await;

        let error = response.unwrap_err().to_string();
        assert!(error.contains("429"));
    }

    #[tokio::test]
    async fn test_chat_completion_undecodable_envelope() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200).body("<html>gateway</html>");
            })
            .await;
        let models =
            Models::new(&server.base_url(), "sk-test", Duration::from_secs(5))
                .unwrap();

        let response = models.chat_completion(request()).await;

        assert!(response.is_err());
    }

    #[tokio::test]
    async fn test_chat_completion_timeout() {
        // Arrange
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200)
                    .delay(Duration::from_millis(500))
                    .json_body(json!({"choices": []}));
            })
            .await;
        let models = Models::new(
            &server.base_url(),
            "sk-test",
            Duration::from_millis(100),
        )
        .unwrap();

        // Act
        let response = models.chat_completion(request()).await;

        // Assert
        let error = response.unwrap_err();
        let timed_out = error
            .chain()
            .filter_map(|e| e.downcast_ref::<reqwest::Error>())
            .any(|e| e.is_timeout());
        assert!(timed_out, "{:#}", error);
    }
}

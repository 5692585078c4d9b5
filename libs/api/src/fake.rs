use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use anyhow::anyhow;
use openai::models::{
    chat_completion::{
        ChatCompletion, ChatCompletionRequest, ChatCompletionResponse, Choice,
        ResponseMessage, Role,
    },
    list_models::{ListModels, Model, ModelList},
};

/// Scripted backend for handler and orchestrator tests.
#[derive(Clone, Debug)]
pub struct FakeBackend {
    reply: Reply,
    reachable: bool,
    calls: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<ChatCompletionRequest>>>,
}

#[derive(Clone, Debug)]
enum Reply {
    Content(Option<String>),
    Failure(String),
}

impl FakeBackend {
    pub fn replying(content: &str) -> Self {
        Self::with_reply(Reply::Content(Some(content.to_string())))
    }

    pub fn silent() -> Self {
        Self::with_reply(Reply::Content(None))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_reply(Reply::Failure(message.to_string()))
    }

    pub fn unreachable(mut self) -> Self {
        self.reachable = false;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ChatCompletionRequest> {
        self.last_request.lock().unwrap().clone()
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            reachable: true,
            calls: Arc::new(AtomicUsize::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }
}

impl ChatCompletion for FakeBackend {
    async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> anyhow::Result<ChatCompletionResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request);

        match &self.reply {
            Reply::Content(content) => Ok(ChatCompletionResponse {
                choices: vec![Choice {
                    message: ResponseMessage {
                        role: Role::Assistant,
                        content: content.clone(),
                    },
                    finish_reason: Some("stop".to_string()),
                }],
            }),
            Reply::Failure(message) => Err(anyhow!(message.clone())),
        }
    }
}

impl ListModels for FakeBackend {
    async fn list_models(&self) -> anyhow::Result<ModelList> {
        if !self.reachable {
            return Err(anyhow!("connection refused"));
        }

        Ok(ModelList {
            data: vec![Model {
                id: "fake-model".to_string(),
                owned_by: None,
            }],
        })
    }
}

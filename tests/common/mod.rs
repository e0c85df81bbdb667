#![allow(dead_code)]

use async_trait::async_trait;
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    time::Duration,
};
use train_assistant::{
    AssistantError, ChatCompletion, ChatCompletionRequest, CompletionBackend, Result, ToolCall,
};

/// Backend that replays canned completions and records every request
#[derive(Debug, Clone, Default)]
pub struct ScriptedBackend {
    responses: Arc<Mutex<VecDeque<Result<ChatCompletion>>>>,
    requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
}

impl ScriptedBackend {
    pub fn new(responses: impl IntoIterator<Item = ChatCompletion>) -> Self {
        let backend = Self::default();
        for response in responses {
            backend.push(response);
        }
        backend
    }

    pub fn push(&self, response: ChatCompletion) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    pub fn push_error(&self, error: AssistantError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn remaining(&self) -> usize {
        self.responses.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionBackend for ScriptedBackend {
    async fn complete(&self, request: &ChatCompletionRequest) -> Result<ChatCompletion> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AssistantError::Api("script exhausted".to_string())))
    }
}

/// Backend that never answers in time
#[derive(Debug, Default)]
pub struct StalledBackend;

#[async_trait]
impl CompletionBackend for StalledBackend {
    async fn complete(&self, _request: &ChatCompletionRequest) -> Result<ChatCompletion> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(ChatCompletion::text("too late"))
    }
}

/// Backend that answers after a fixed delay
#[derive(Debug)]
pub struct SlowBackend {
    pub delay: Duration,
    pub reply: String,
}

#[async_trait]
impl CompletionBackend for SlowBackend {
    async fn complete(&self, _request: &ChatCompletionRequest) -> Result<ChatCompletion> {
        tokio::time::sleep(self.delay).await;
        Ok(ChatCompletion::text(&self.reply))
    }
}

pub fn trains_call(id: &str, origin: &str, destination: &str) -> ToolCall {
    ToolCall::new(
        id,
        "getTrainsBetweenStations",
        serde_json::json!({ "origin": origin, "destination": destination }).to_string(),
    )
}

pub fn booking_call(id: &str, train: &str) -> ToolCall {
    ToolCall::new(
        id,
        "bookTicket",
        serde_json::json!({ "train": train }).to_string(),
    )
}

use crate::{
    core::tool_call::ToolCall,
    error::{AssistantError, Result},
    types::result::TokenUsage,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// `finish_reason` reported when the model wants tools run
pub const FINISH_REASON_TOOL_CALLS: &str = "tool_calls";

/// Anything that can answer a chat completion request
#[async_trait]
pub trait CompletionBackend: Send + Sync + std::fmt::Debug {
    async fn complete(&self, request: &ChatCompletionRequest) -> Result<ChatCompletion>;
}

/// Body of a `POST /chat/completions` call
#[derive(Clone, Debug, PartialEq)]
pub struct ChatCompletionRequest {
    model: String,
    messages: Vec<Value>,
    temperature: Option<f32>,
    tools: Vec<Value>,
    tool_choice: Option<Value>,
    max_tokens: Option<u32>,
}

impl ChatCompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Value>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: None,
            tools: Vec::new(),
            tool_choice: None,
            max_tokens: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_tools(mut self, tools: Vec<Value>) -> Self {
        self.tools = tools;
        self
    }

    pub fn with_tool_choice(mut self, tool_choice: Value) -> Self {
        self.tool_choice = Some(tool_choice);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn messages(&self) -> &[Value] {
        &self.messages
    }

    pub fn temperature(&self) -> Option<f32> {
        self.temperature
    }

    pub fn tools(&self) -> &[Value] {
        &self.tools
    }

    pub fn tool_choice(&self) -> Option<&Value> {
        self.tool_choice.as_ref()
    }

    pub fn to_value(&self) -> Value {
        let mut body = json!({
            "model": self.model,
            "messages": self.messages,
        });

        if let Some(temperature) = self.temperature {
            body["temperature"] = json!(temperature);
        }

        if !self.tools.is_empty() {
            body["tools"] = Value::Array(self.tools.clone());
        }

        if let Some(tool_choice) = &self.tool_choice {
            body["tool_choice"] = tool_choice.clone();
        }

        if let Some(max_tokens) = self.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }

        body
    }
}

/// The parts of a chat completion response the assistant reads
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub finish_reason: Option<String>,
    pub message: ResponseMessage,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
    /// Kept as raw JSON so one bad entry does not reject the whole response
    #[serde(default)]
    pub tool_calls: Option<Vec<Value>>,
}

impl ChatCompletion {
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|err| {
            AssistantError::Api(format!("Unexpected completion response shape: {err}"))
        })
    }

    /// Plain text answer with `finish_reason: "stop"`
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            choices: vec![Choice {
                finish_reason: Some("stop".to_string()),
                message: ResponseMessage {
                    content: Some(content.into()),
                    tool_calls: None,
                },
            }],
            usage: None,
        }
    }

    /// Tool call request with `finish_reason: "tool_calls"`
    pub fn tool_calls(calls: &[ToolCall]) -> Self {
        Self {
            choices: vec![Choice {
                finish_reason: Some(FINISH_REASON_TOOL_CALLS.to_string()),
                message: ResponseMessage {
                    content: None,
                    tool_calls: Some(calls.iter().map(ToolCall::to_openai_format).collect()),
                },
            }],
            usage: None,
        }
    }

    pub fn with_usage(mut self, usage: TokenUsage) -> Self {
        self.usage = Some(usage);
        self
    }

    pub fn first_choice(&self) -> Option<&Choice> {
        self.choices.first()
    }
}

impl Choice {
    pub fn requests_tools(&self) -> bool {
        self.finish_reason.as_deref() == Some(FINISH_REASON_TOOL_CALLS)
    }
}

impl ResponseMessage {
    /// Number of entries in `tool_calls`, well-formed or not
    pub fn tool_call_count(&self) -> usize {
        self.tool_calls.as_ref().map(Vec::len).unwrap_or(0)
    }

    /// The first requested tool call, if it is well-formed
    pub fn first_tool_call(&self) -> Option<ToolCall> {
        self.tool_calls
            .as_ref()?
            .first()
            .and_then(ToolCall::from_openai_format)
    }

    /// Every well-formed tool call in the message
    pub fn parsed_tool_calls(&self) -> Vec<ToolCall> {
        self.tool_calls
            .iter()
            .flatten()
            .filter_map(ToolCall::from_openai_format)
            .collect()
    }

    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }
}

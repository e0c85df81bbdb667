use super::tool_call::ToolCall;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single entry in the conversation transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Turn {
    /// Opening notice that frames the conversation
    System { content: String },
    /// Text typed by the user
    User { content: String },
    /// Reply from the model, possibly requesting tool calls
    Assistant {
        content: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        tool_calls: Vec<ToolCall>,
    },
    /// Result of a local tool run, answering one tool call
    Tool {
        tool_call_id: String,
        content: String,
    },
}

impl Turn {
    pub fn system(content: impl Into<String>) -> Self {
        Turn::System {
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Turn::User {
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Turn::Assistant {
            content: Some(content.into()),
            tool_calls: Vec::new(),
        }
    }

    pub fn tool_result(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Turn::Tool {
            tool_call_id: tool_call_id.into(),
            content: content.into(),
        }
    }

    /// Tool calls carried by an assistant turn
    pub fn tool_calls(&self) -> &[ToolCall] {
        match self {
            Turn::Assistant { tool_calls, .. } => tool_calls,
            _ => &[],
        }
    }

    /// Convert turn to OpenAI message format
    pub fn to_message(&self) -> Value {
        match self {
            Turn::System { content } => serde_json::json!({
                "role": "system",
                "content": content
            }),
            Turn::User { content } => serde_json::json!({
                "role": "user",
                "content": content
            }),
            Turn::Assistant {
                content,
                tool_calls,
            } => {
                let mut message = serde_json::json!({
                    "role": "assistant",
                    "content": content
                });
                if !tool_calls.is_empty() {
                    message["tool_calls"] = Value::Array(
                        tool_calls.iter().map(ToolCall::to_openai_format).collect(),
                    );
                }
                message
            }
            Turn::Tool {
                tool_call_id,
                content,
            } => serde_json::json!({
                "role": "tool",
                "tool_call_id": tool_call_id,
                "content": content
            }),
        }
    }

    /// Get a human-readable description of the turn
    pub fn describe(&self) -> String {
        match self {
            Turn::System { content } => format!("📣 System: {}", content),
            Turn::User { content } => format!("🧭 User: {}", content),
            Turn::Assistant {
                content,
                tool_calls,
            } if !tool_calls.is_empty() => {
                let calls: Vec<String> = tool_calls.iter().map(ToolCall::describe).collect();
                match content {
                    Some(text) if !text.is_empty() => {
                        format!("🔧 Action: {} ({})", calls.join(", "), text)
                    }
                    _ => format!("🔧 Action: {}", calls.join(", ")),
                }
            }
            Turn::Assistant { content, .. } => {
                format!("✅ Assistant: {}", content.as_deref().unwrap_or_default())
            }
            Turn::Tool { content, .. } => format!("👁 Observation: {}", content),
        }
    }
}

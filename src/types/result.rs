use crate::core::tool_call::{ToolCall, ToolOutput};
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// What happened while handling one user turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TurnOutcome {
    /// The model answered without requesting a tool
    Answered { reply: String },
    /// One tool call was executed before the final answer
    ToolDispatched {
        call: ToolCall,
        output: ToolOutput,
        /// Tool calls requested in the same response that were not executed
        ignored_calls: usize,
        reply: String,
    },
    /// The model asked for a tool that is not registered. Nothing was run and
    /// the answer was requested from the unchanged transcript.
    ToolSkipped { tool: String, reply: String },
    /// The response could not be acted on; no answer was requested
    MalformedResponse { reason: String },
}

impl TurnOutcome {
    /// Text to show the user, if the turn produced any
    pub fn reply(&self) -> Option<&str> {
        match self {
            TurnOutcome::Answered { reply }
            | TurnOutcome::ToolDispatched { reply, .. }
            | TurnOutcome::ToolSkipped { reply, .. } => Some(reply),
            TurnOutcome::MalformedResponse { .. } => None,
        }
    }

    pub fn tool_output(&self) -> Option<&ToolOutput> {
        match self {
            TurnOutcome::ToolDispatched { output, .. } => Some(output),
            _ => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, TurnOutcome::MalformedResponse { .. })
    }
}

/// Token usage information from the API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl AddAssign for TokenUsage {
    fn add_assign(&mut self, other: Self) {
        self.prompt_tokens = self.prompt_tokens.saturating_add(other.prompt_tokens);
        self.completion_tokens = self.completion_tokens.saturating_add(other.completion_tokens);
        self.total_tokens = self.total_tokens.saturating_add(other.total_tokens);
    }
}

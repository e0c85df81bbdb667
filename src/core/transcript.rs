use super::turn::Turn;
use crate::error::{AssistantError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

/// Append-only record of a conversation.
///
/// Turns can only be added, never removed or reordered. A tool-call turn and
/// the tool result answering it are appended together by
/// [`Transcript::push_tool_exchange`], which keeps the result directly after
/// the call it references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// Start a transcript with a single system turn
    pub fn new(system_notice: impl Into<String>) -> Self {
        let mut transcript = Self { turns: Vec::new() };
        transcript.append(Turn::system(system_notice));
        transcript
    }

    fn append(&mut self, turn: Turn) {
        info!(target: "train_assistant::turns", "{}", turn.describe());
        self.turns.push(turn);
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.append(Turn::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.append(Turn::assistant(content));
    }

    /// Append an assistant tool-call turn followed by the tool result that answers it
    pub fn push_tool_exchange(&mut self, call_turn: Turn, result_turn: Turn) -> Result<()> {
        if call_turn.tool_calls().is_empty() {
            return Err(AssistantError::InvalidFunctionCall(
                "tool exchange must start with an assistant turn carrying tool calls".to_string(),
            ));
        }

        let Turn::Tool { tool_call_id, .. } = &result_turn else {
            return Err(AssistantError::InvalidFunctionCall(
                "tool exchange must end with a tool result turn".to_string(),
            ));
        };

        if !call_turn
            .tool_calls()
            .iter()
            .any(|call| &call.id == tool_call_id)
        {
            return Err(AssistantError::InvalidFunctionCall(format!(
                "tool result references unknown call id '{}'",
                tool_call_id
            )));
        }

        self.append(call_turn);
        self.append(result_turn);
        Ok(())
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Always false once constructed, the system turn is never dropped
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Convert the transcript to OpenAI message format
    pub fn as_messages(&self) -> Vec<Value> {
        self.turns.iter().map(Turn::to_message).collect()
    }

    /// Contents of every tool result turn, in order
    pub fn tool_results(&self) -> Vec<&str> {
        self.turns
            .iter()
            .filter_map(|turn| match turn {
                Turn::Tool { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tool_call::ToolCall;

    fn call_turn(id: &str) -> Turn {
        Turn::Assistant {
            content: None,
            tool_calls: vec![ToolCall::new(id, "bookTicket", "{\"train\":\"Rajdhani\"}")],
        }
    }

    #[test]
    fn test_starts_with_system_turn() {
        let transcript = Transcript::new("Hello");
        assert_eq!(transcript.len(), 1);
        assert!(!transcript.is_empty());
        assert_eq!(transcript.turns()[0], Turn::system("Hello"));
    }

    #[test]
    fn test_as_messages() {
        let mut transcript = Transcript::new("Hello");
        transcript.push_user("Trains to Mumbai?");
        transcript.push_assistant("Here they are.");

        let messages = transcript.as_messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[2]["role"], "assistant");
    }

    #[test]
    fn test_tool_exchange_is_adjacent() {
        let mut transcript = Transcript::new("Hello");
        transcript.push_user("Book the Rajdhani");
        transcript
            .push_tool_exchange(call_turn("call_1"), Turn::tool_result("call_1", "334456"))
            .unwrap();

        assert_eq!(transcript.len(), 4);
        assert_eq!(transcript.turns()[2].tool_calls()[0].id, "call_1");
        assert_eq!(transcript.last(), Some(&Turn::tool_result("call_1", "334456")));
        assert_eq!(transcript.tool_results(), vec!["334456"]);
    }

    #[test]
    fn test_tool_exchange_rejects_mismatched_id() {
        let mut transcript = Transcript::new("Hello");
        let err = transcript
            .push_tool_exchange(call_turn("call_1"), Turn::tool_result("call_2", "334456"))
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_FUNCTION_CALL");
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn test_tool_exchange_rejects_plain_turns() {
        let mut transcript = Transcript::new("Hello");
        assert!(transcript
            .push_tool_exchange(Turn::assistant("hi"), Turn::tool_result("call_1", "x"))
            .is_err());
        assert!(transcript
            .push_tool_exchange(call_turn("call_1"), Turn::user("x"))
            .is_err());
        assert_eq!(transcript.len(), 1);
    }
}

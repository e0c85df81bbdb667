use crate::{
    core::{assistant::Assistant, session::Session, tool_call::ToolExecution, turn::Turn},
    error::{AssistantError, Result},
    services::completion::ChatCompletionRequest,
    types::result::TurnOutcome,
};
use serde_json::json;
use tracing::{debug, warn};

impl Assistant {
    /// Process one line of user input against the session.
    ///
    /// At most one tool call is executed per turn. Extra calls requested in the
    /// same response are counted on the outcome but not run.
    pub async fn handle_turn(&self, session: &mut Session, user_text: &str) -> Result<TurnOutcome> {
        let text = user_text.trim();
        if text.is_empty() {
            return Err(AssistantError::Validation(
                "user text must not be empty".to_string(),
            ));
        }

        session.transcript_mut().push_user(text);

        let tool_request =
            ChatCompletionRequest::new(self.model(), session.transcript().as_messages())
                .with_temperature(self.temperature())
                .with_max_tokens(self.max_tokens())
                .with_tools(self.function_factory().get_openai_tools())
                .with_tool_choice(json!("auto"));

        let completion = self.complete(&tool_request).await?;
        session.record_usage(completion.usage);

        let Some(choice) = completion.first_choice() else {
            return Ok(malformed("completion response contained no choices"));
        };

        let mut dispatched = None;
        let mut skipped_tool = None;

        if choice.requests_tools() {
            let Some(call) = choice.message.first_tool_call() else {
                return Ok(malformed(
                    "finish_reason was tool_calls but no usable tool call was present",
                ));
            };

            if self.function_factory().has_function(&call.name) {
                let ignored_calls = choice.message.tool_call_count().saturating_sub(1);
                if ignored_calls > 0 {
                    warn!(
                        target: "train_assistant::tools",
                        ignored_calls,
                        executed = %call.name,
                        "response requested several tool calls; only the first is executed"
                    );
                }

                let execution = ToolExecution::start(call.clone());
                let value = self.function_factory().execute_call(&call).await?;
                let output = execution.complete(value);
                debug!(
                    target: "train_assistant::tools",
                    tool = %output.tool_name,
                    duration_ms = ?output.duration_ms,
                    "tool finished"
                );

                let call_turn = Turn::Assistant {
                    content: choice.message.content.clone(),
                    tool_calls: choice.message.parsed_tool_calls(),
                };
                let result_turn =
                    Turn::tool_result(output.tool_call_id.clone(), output.as_string());
                session
                    .transcript_mut()
                    .push_tool_exchange(call_turn, result_turn)?;

                dispatched = Some((call, output, ignored_calls));
            } else {
                // nothing is recorded; the answer comes from the unchanged transcript
                warn!(
                    target: "train_assistant::tools",
                    tool = %call.name,
                    "model requested an unregistered tool, answering without it"
                );
                skipped_tool = Some(call.name);
            }
        }

        let answer_request =
            ChatCompletionRequest::new(self.model(), session.transcript().as_messages())
                .with_temperature(self.temperature())
                .with_max_tokens(self.max_tokens());

        let answer = self.complete(&answer_request).await?;
        session.record_usage(answer.usage);

        let Some(answer_choice) = answer.first_choice() else {
            return Ok(malformed("answer response contained no choices"));
        };

        let reply = answer_choice.message.text().to_string();
        session.transcript_mut().push_assistant(reply.clone());
        session.finish_turn();

        Ok(match (dispatched, skipped_tool) {
            (Some((call, output, ignored_calls)), _) => TurnOutcome::ToolDispatched {
                call,
                output,
                ignored_calls,
                reply,
            },
            (None, Some(tool)) => TurnOutcome::ToolSkipped { tool, reply },
            (None, None) => TurnOutcome::Answered { reply },
        })
    }
}

fn malformed(reason: impl Into<String>) -> TurnOutcome {
    let reason = reason.into();
    warn!(target: "train_assistant::turns", %reason, "malformed completion response");
    TurnOutcome::MalformedResponse { reason }
}

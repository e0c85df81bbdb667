//! train-assistant: a command-line train reservation assistant built on LLM
//! tool calling.
//!
//! Each line of user input is sent to a chat completion endpoint together with
//! two tool declarations, `getTrainsBetweenStations` and `bookTicket`. When the
//! model asks for one of them, the matching local tool runs, its result is
//! added to the transcript and a second completion produces the answer.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use train_assistant::{Assistant, OpenAIClient, Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_key = std::env::var("OPENAI_API_KEY")?;
//!     let assistant = Assistant::train_reservation(OpenAIClient::new(api_key));
//!     let mut session = Session::default();
//!
//!     let outcome = assistant
//!         .handle_turn(&mut session, "Which trains run from Delhi to Mumbai?")
//!         .await?;
//!     if let Some(reply) = outcome.reply() {
//!         println!("{}", reply);
//!     }
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod error;
pub mod schemas;
pub mod services;
pub mod tools;
pub mod types;

pub use crate::core::{
    Assistant, Session, TokenUsage, ToolCall, ToolExecution, ToolOutput, Transcript, Turn,
    TurnOutcome,
};
pub use error::{AssistantError, Result};
pub use services::{ChatCompletion, ChatCompletionRequest, CompletionBackend, OpenAIClient};
pub use tools::{BookTicketTool, BookingDesk, FunctionFactory, Tool, TrainCatalog, TrainRouteTool};

#[cfg(feature = "cli")]
pub mod cli;

pub mod assistant;
pub mod session;
pub mod tool_call;
pub mod transcript;
pub mod turn;

pub use crate::types::result::{TokenUsage, TurnOutcome};
pub use assistant::{Assistant, DEFAULT_MODEL};
pub use session::{Session, DEFAULT_SYSTEM_NOTICE};
pub use tool_call::{ToolCall, ToolExecution, ToolOutput};
pub use transcript::Transcript;
pub use turn::Turn;

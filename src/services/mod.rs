pub mod chat_loop;
pub mod completion;
pub(crate) mod conversation;
pub mod openai_client;

pub use completion::{
    ChatCompletion, ChatCompletionRequest, Choice, CompletionBackend, ResponseMessage,
    FINISH_REASON_TOOL_CALLS,
};
pub use openai_client::{OpenAIClient, DEFAULT_BASE_URL};

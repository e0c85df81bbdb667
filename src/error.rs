use thiserror::Error;

/// Main error type for the assistant
#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Tool execution error: {0}")]
    ToolExecution(String),

    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Invalid function call: {0}")]
    InvalidFunctionCall(String),

    #[error("Timeout error: {0}")]
    Timeout(String),

    #[error("Rate limit exceeded: retry after {retry_after}s")]
    RateLimit { retry_after: u64 },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AssistantError>;

impl AssistantError {
    /// Stable error code, used as a structured log field
    pub fn error_code(&self) -> &'static str {
        match self {
            AssistantError::Config(_) => "CONFIG_ERROR",
            AssistantError::Http(_) => "HTTP_ERROR",
            AssistantError::Api(_) => "API_ERROR",
            AssistantError::Serialization(_) => "SERIALIZATION_ERROR",
            AssistantError::Io(_) => "IO_ERROR",
            AssistantError::Validation(_) => "VALIDATION_ERROR",
            AssistantError::ToolExecution(_) => "TOOL_EXECUTION_ERROR",
            AssistantError::ToolNotFound(_) => "TOOL_NOT_FOUND",
            AssistantError::InvalidFunctionCall(_) => "INVALID_FUNCTION_CALL",
            AssistantError::Timeout(_) => "TIMEOUT_ERROR",
            AssistantError::RateLimit { .. } => "RATE_LIMIT_ERROR",
        }
    }
}

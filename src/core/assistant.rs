use crate::{
    error::{AssistantError, Result},
    services::{
        completion::{ChatCompletion, ChatCompletionRequest, CompletionBackend},
        openai_client::OpenAIClient,
    },
    tools::{BookingDesk, FunctionFactory, TrainCatalog},
};
use std::time::Duration;
use tokio::time::timeout;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Conversation orchestrator: talks to the completion service and runs the
/// tools it asks for
#[derive(Debug)]
pub struct Assistant {
    backend: Box<dyn CompletionBackend>,
    function_factory: FunctionFactory,
    model: String,
    temperature: f32,
    max_tokens: Option<u32>,
    timeout: Option<Duration>,
}

impl Assistant {
    pub fn new(backend: impl CompletionBackend + 'static, function_factory: FunctionFactory) -> Self {
        Self {
            backend: Box::new(backend),
            function_factory,
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.0,
            max_tokens: None,
            timeout: None,
        }
    }

    /// Assistant with the default train catalog and booking desk
    pub fn train_reservation(backend: impl CompletionBackend + 'static) -> Self {
        Self::new(
            backend,
            FunctionFactory::train_reservation(
                TrainCatalog::default(),
                BookingDesk::reservation_default(),
            ),
        )
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Overall budget for one completion, retries included. Without it each
    /// HTTP attempt is bounded only by the client's own request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn function_factory(&self) -> &FunctionFactory {
        &self.function_factory
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub(crate) fn temperature(&self) -> f32 {
        self.temperature
    }

    pub(crate) fn max_tokens(&self) -> Option<u32> {
        self.max_tokens
    }

    pub(crate) async fn complete(&self, request: &ChatCompletionRequest) -> Result<ChatCompletion> {
        let Some(limit) = self.timeout else {
            return self.backend.complete(request).await;
        };
        timeout(limit, self.backend.complete(request))
            .await
            .map_err(|_| {
                AssistantError::Timeout(format!(
                    "completion request exceeded {}ms",
                    limit.as_millis()
                ))
            })?
    }

    /// Reservation assistant talking to the endpoint named by the environment
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            AssistantError::Config(
                "OPENAI_API_KEY environment variable must be set before creating an Assistant"
                    .to_string(),
            )
        })?;
        let mut client = OpenAIClient::new(api_key);
        if let Ok(base_url) =
            std::env::var("OPENAI_BASE_URL").or_else(|_| std::env::var("OPENROUTER_BASE_URL"))
        {
            client = client.with_base_url(base_url);
        }
        Ok(Self::train_reservation(client))
    }
}

use crate::error::AssistantError;
use std::{future::Future, pin::Pin};

/// Boxed future returned by [`Tool::execute`]
pub type ToolFuture<'a> =
    Pin<Box<dyn Future<Output = Result<serde_json::Value, AssistantError>> + Send + 'a>>;

/// A local function the model can call
pub trait Tool: Send + Sync + std::fmt::Debug {
    /// The name of the tool (used in function calls)
    fn name(&self) -> &'static str;

    /// A description of what the tool does
    fn description(&self) -> &'static str;

    /// JSON Schema for the tool's parameters
    fn parameters_schema(&self) -> serde_json::Value;

    /// Execute the tool with given parameters
    fn execute(&self, parameters: serde_json::Value) -> ToolFuture<'_>;
}

/// Registry for available tools, kept in registration order
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool, replacing any tool with the same name in place
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        match self.tools.iter_mut().find(|existing| existing.name() == tool.name()) {
            Some(slot) => *slot = Box::new(tool),
            None => self.tools.push(Box::new(tool)),
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools
            .iter()
            .find(|tool| tool.name() == name)
            .map(|tool| tool.as_ref())
    }

    /// Get all registered tools
    pub fn list(&self) -> Vec<&dyn Tool> {
        self.tools.iter().map(|tool| tool.as_ref()).collect()
    }

    /// Generate tool declarations for OpenAI function calling
    pub fn to_openai_tools(&self) -> Vec<serde_json::Value> {
        self.tools
            .iter()
            .map(|tool| {
                serde_json::json!({
                    "type": "function",
                    "function": {
                        "name": tool.name(),
                        "description": tool.description(),
                        "parameters": tool.parameters_schema()
                    }
                })
            })
            .collect()
    }
}

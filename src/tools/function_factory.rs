use super::{
    booking::{BookTicketTool, BookingDesk},
    tool::ToolRegistry,
    trains::{TrainCatalog, TrainRouteTool},
    Tool,
};
use crate::{core::tool_call::ToolCall, schemas::validation::validate_tool_arguments};
use crate::{AssistantError, Result};
use serde_json::Value;
use tracing::debug;

/// Factory for creating and managing function/tool execution
#[derive(Debug)]
pub struct FunctionFactory {
    registry: ToolRegistry,
}

impl FunctionFactory {
    /// Create a new function factory
    pub fn new() -> Self {
        Self {
            registry: ToolRegistry::new(),
        }
    }

    /// Factory holding the train lookup and booking tools backed by the given tables
    pub fn train_reservation(catalog: TrainCatalog, desk: BookingDesk) -> Self {
        let mut factory = Self::new();
        factory.register_tool(TrainRouteTool::new(catalog));
        factory.register_tool(BookTicketTool::new(desk));
        factory
    }

    /// Register a tool with the factory
    pub fn register_tool<T: Tool + 'static>(&mut self, tool: T) {
        self.registry.register(tool);
    }

    /// Execute a function call by name
    pub async fn execute_function(&self, function_name: &str, parameters: Value) -> Result<Value> {
        let tool = self
            .registry
            .get(function_name)
            .ok_or_else(|| AssistantError::ToolNotFound(function_name.to_string()))?;

        validate_tool_arguments(function_name, &tool.parameters_schema(), &parameters)?;
        debug!(target: "train_assistant::tools", tool = function_name, %parameters, "executing tool");

        tool.execute(parameters).await
    }

    /// Decode the call's raw arguments and execute it
    pub async fn execute_call(&self, call: &ToolCall) -> Result<Value> {
        let parameters: Value = call.parse_arguments()?;
        self.execute_function(&call.name, parameters).await
    }

    /// Get all available tools for OpenAI function calling
    pub fn get_openai_tools(&self) -> Vec<Value> {
        self.registry.to_openai_tools()
    }

    /// Check if a function exists
    pub fn has_function(&self, name: &str) -> bool {
        self.registry.get(name).is_some()
    }

    /// Names of the registered tools, in declaration order
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.registry.list().iter().map(|tool| tool.name()).collect()
    }
}

impl Default for FunctionFactory {
    fn default() -> Self {
        Self::new()
    }
}

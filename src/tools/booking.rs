use super::tool::{Tool, ToolFuture};
use crate::{schemas::parameters_schema, AssistantError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Returned when a train cannot be booked
pub const UNAVAILABLE: &str = "UNAVAILABLE";

/// Parameters for a booking
#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct BookingRequest {
    /// The train name
    pub train: String,
}

/// Confirmation codes handed out per train name (exact match)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingDesk {
    confirmations: HashMap<String, String>,
}

impl BookingDesk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_confirmation(
        mut self,
        train: impl Into<String>,
        confirmation: impl Into<String>,
    ) -> Self {
        self.confirmations.insert(train.into(), confirmation.into());
        self
    }

    /// Confirmation code for `train`, or [`UNAVAILABLE`]
    pub fn book(&self, train: &str) -> &str {
        self.confirmations
            .get(train)
            .map(String::as_str)
            .unwrap_or(UNAVAILABLE)
    }

    /// Desk used by the reservation assistant: only the Rajdhani can be booked
    pub fn reservation_default() -> Self {
        Self::new().with_confirmation("Rajdhani", "334456")
    }
}

/// Books a ticket on a named train
#[derive(Debug)]
pub struct BookTicketTool {
    desk: BookingDesk,
}

impl BookTicketTool {
    pub fn new(desk: BookingDesk) -> Self {
        Self { desk }
    }
}

impl Default for BookTicketTool {
    fn default() -> Self {
        Self::new(BookingDesk::reservation_default())
    }
}

impl Tool for BookTicketTool {
    fn name(&self) -> &'static str {
        "bookTicket"
    }

    fn description(&self) -> &'static str {
        "Book a ticket on the named train and return its confirmation code"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        parameters_schema::<BookingRequest>()
    }

    fn execute(&self, parameters: serde_json::Value) -> ToolFuture<'_> {
        Box::pin(async move {
            let request: BookingRequest = serde_json::from_value(parameters).map_err(|e| {
                AssistantError::ToolExecution(format!("Invalid parameters: {}", e))
            })?;

            Ok(serde_json::Value::String(
                self.desk.book(&request.train).to_string(),
            ))
        })
    }
}

use super::tool::{Tool, ToolFuture};
use crate::{schemas::parameters_schema, AssistantError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Parameters for a route lookup
#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct RouteQuery {
    /// The origin station
    pub origin: String,
    /// The destination station
    pub destination: String,
}

/// Trains known to run between pairs of stations.
///
/// Routes are keyed by the exact `(origin, destination)` pair, so a route and
/// its reverse are independent entries. Any pair without an entry gets the
/// fallback list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainCatalog {
    routes: HashMap<String, HashMap<String, Vec<String>>>,
    fallback: Vec<String>,
}

impl TrainCatalog {
    /// Empty catalog answering every lookup with `fallback`
    pub fn new<I, S>(fallback: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            routes: HashMap::new(),
            fallback: fallback.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_route<I, S>(
        mut self,
        origin: impl Into<String>,
        destination: impl Into<String>,
        trains: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.routes
            .entry(origin.into())
            .or_default()
            .insert(destination.into(), trains.into_iter().map(Into::into).collect());
        self
    }

    pub fn trains_between(&self, origin: &str, destination: &str) -> &[String] {
        self.routes
            .get(origin)
            .and_then(|destinations| destinations.get(destination))
            .unwrap_or(&self.fallback)
    }
}

impl Default for TrainCatalog {
    fn default() -> Self {
        Self::new(["Premium Train", "Express Train"])
            .with_route("Delhi", "Mumbai", ["Train1", "Train2", "Train3", "Rajdhani"])
            .with_route("Mumbai", "Delhi", ["Shatabdi", "Duronto", "Train4"])
    }
}

/// Lists the trains running between two stations
#[derive(Debug, Default)]
pub struct TrainRouteTool {
    catalog: TrainCatalog,
}

impl TrainRouteTool {
    pub fn new(catalog: TrainCatalog) -> Self {
        Self { catalog }
    }
}

impl Tool for TrainRouteTool {
    fn name(&self) -> &'static str {
        "getTrainsBetweenStations"
    }

    fn description(&self) -> &'static str {
        "List the trains running from an origin station to a destination station"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        parameters_schema::<RouteQuery>()
    }

    fn execute(&self, parameters: serde_json::Value) -> ToolFuture<'_> {
        Box::pin(async move {
            let query: RouteQuery = serde_json::from_value(parameters).map_err(|e| {
                AssistantError::ToolExecution(format!("Invalid parameters: {}", e))
            })?;

            let trains = self.catalog.trains_between(&query.origin, &query.destination);
            Ok(serde_json::json!(trains))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_curated_routes() {
        let catalog = TrainCatalog::default();
        assert_eq!(
            catalog.trains_between("Delhi", "Mumbai"),
            ["Train1", "Train2", "Train3", "Rajdhani"]
        );
        assert_eq!(
            catalog.trains_between("Mumbai", "Delhi"),
            ["Shatabdi", "Duronto", "Train4"]
        );
    }

    #[test]
    fn test_unknown_pairs_fall_back() {
        let catalog = TrainCatalog::default();
        for (origin, destination) in [
            ("Delhi", "Chennai"),
            ("Chennai", "Delhi"),
            ("Pune", "Goa"),
            ("delhi", "mumbai"),
            ("Delhi", "Delhi"),
            ("", ""),
        ] {
            assert_eq!(
                catalog.trains_between(origin, destination),
                ["Premium Train", "Express Train"],
                "{origin} -> {destination}"
            );
        }
    }

    #[test]
    fn test_lookup_is_repeatable() {
        let catalog = TrainCatalog::default();
        let first = catalog.trains_between("Delhi", "Mumbai").to_vec();
        let second = catalog.trains_between("Delhi", "Mumbai").to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_injected_catalog() {
        let catalog = TrainCatalog::new(["Local"]).with_route("Pune", "Goa", ["Konkan Kanya"]);
        assert_eq!(catalog.trains_between("Pune", "Goa"), ["Konkan Kanya"]);
        assert_eq!(catalog.trains_between("Delhi", "Mumbai"), ["Local"]);
    }

    #[tokio::test]
    async fn test_tool_execution() {
        let tool = TrainRouteTool::default();
        let result = tool
            .execute(json!({"origin": "Mumbai", "destination": "Delhi"}))
            .await
            .unwrap();
        assert_eq!(result, json!(["Shatabdi", "Duronto", "Train4"]));

        let result = tool.execute(json!({"origin": "Mumbai"})).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_schema_declares_both_stations() {
        let schema = TrainRouteTool::default().parameters_schema();
        assert_eq!(schema["properties"]["origin"]["description"], "The origin station");
        assert_eq!(
            schema["properties"]["destination"]["description"],
            "The destination station"
        );
        let required = schema["required"].as_array().unwrap();
        assert!(required.contains(&json!("origin")));
        assert!(required.contains(&json!("destination")));
    }
}

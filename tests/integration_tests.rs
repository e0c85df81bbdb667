use serde_json::json;
use train_assistant::{
    tools::UNAVAILABLE, AssistantError, BookTicketTool, BookingDesk, FunctionFactory, Tool,
    ToolCall, TrainCatalog, TrainRouteTool,
};

fn reservation_factory() -> FunctionFactory {
    FunctionFactory::train_reservation(TrainCatalog::default(), BookingDesk::reservation_default())
}

#[tokio::test]
async fn test_train_route_tool() {
    let tool = TrainRouteTool::default();

    let result = tool
        .execute(json!({"origin": "Delhi", "destination": "Mumbai"}))
        .await
        .unwrap();
    assert_eq!(result, json!(["Train1", "Train2", "Train3", "Rajdhani"]));

    let result = tool
        .execute(json!({"origin": "Kolkata", "destination": "Mumbai"}))
        .await
        .unwrap();
    assert_eq!(result, json!(["Premium Train", "Express Train"]));
}

#[tokio::test]
async fn test_book_ticket_tool() {
    let tool = BookTicketTool::default();

    let result = tool.execute(json!({"train": "Rajdhani"})).await.unwrap();
    assert_eq!(result, json!("334456"));

    let result = tool.execute(json!({"train": "Shatabdi"})).await.unwrap();
    assert_eq!(result, json!(UNAVAILABLE));
}

#[tokio::test]
async fn test_function_factory() {
    let factory = reservation_factory();

    assert!(factory.has_function("getTrainsBetweenStations"));
    assert!(factory.has_function("bookTicket"));
    assert!(!factory.has_function("cancelTicket"));
    assert_eq!(
        factory.tool_names(),
        vec!["getTrainsBetweenStations", "bookTicket"]
    );

    let result = factory
        .execute_function("bookTicket", json!({"train": "Rajdhani"}))
        .await
        .unwrap();
    assert_eq!(result, json!("334456"));

    let err = factory
        .execute_function("cancelTicket", json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, AssistantError::ToolNotFound(name) if name == "cancelTicket"));
}

#[tokio::test]
async fn test_execute_call_parses_raw_arguments() {
    let factory = reservation_factory();

    let call = ToolCall::new(
        "call_1",
        "getTrainsBetweenStations",
        "{\"origin\":\"Mumbai\",\"destination\":\"Delhi\"}",
    );
    let result = factory.execute_call(&call).await.unwrap();
    assert_eq!(result, json!(["Shatabdi", "Duronto", "Train4"]));

    let broken = ToolCall::new("call_2", "bookTicket", "train=Rajdhani");
    let err = factory.execute_call(&broken).await.unwrap_err();
    assert_eq!(err.error_code(), "INVALID_FUNCTION_CALL");
}

#[tokio::test]
async fn test_stub_results_are_stable() {
    let factory = reservation_factory();
    let call = ToolCall::new("call_1", "bookTicket", "{\"train\":\"Rajdhani\"}");

    let mut results = Vec::new();
    for _ in 0..5 {
        results.push(factory.execute_call(&call).await.unwrap());
    }
    assert!(results.iter().all(|result| *result == json!("334456")));
}

#[test]
fn test_tool_declarations() {
    let tools = reservation_factory().get_openai_tools();
    assert_eq!(tools.len(), 2);

    let lookup = &tools[0];
    assert_eq!(lookup["type"], "function");
    assert_eq!(lookup["function"]["name"], "getTrainsBetweenStations");
    assert_eq!(lookup["function"]["parameters"]["type"], "object");
    let required = lookup["function"]["parameters"]["required"]
        .as_array()
        .unwrap();
    assert_eq!(required.len(), 2);

    let booking = &tools[1];
    assert_eq!(booking["function"]["name"], "bookTicket");
    assert_eq!(
        booking["function"]["parameters"]["properties"]["train"]["description"],
        "The train name"
    );
    assert_eq!(booking["function"]["parameters"]["required"], json!(["train"]));
}

#[test]
fn test_registering_same_name_replaces_tool() {
    let mut factory = reservation_factory();
    factory.register_tool(BookTicketTool::new(BookingDesk::new()));
    assert_eq!(factory.tool_names().len(), 2);
    assert_eq!(factory.tool_names()[1], "bookTicket");
}

#[test]
fn test_error_handling() {
    let error = AssistantError::ToolExecution("Test error".to_string());
    assert_eq!(error.error_code(), "TOOL_EXECUTION_ERROR");
    assert!(error.to_string().contains("Test error"));
}

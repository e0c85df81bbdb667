use schemars::JsonSchema;
use serde_json::{json, Value};

/// Build the `parameters` object of a function declaration from a typed
/// parameter struct. Field doc comments become property descriptions.
pub fn parameters_schema<T: JsonSchema>() -> Value {
    let root = schemars::schema_for!(T);
    let mut schema = serde_json::to_value(&root.schema).unwrap_or_else(|_| {
        json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    });

    // The Rust type name means nothing to the model.
    if let Some(object) = schema.as_object_mut() {
        object.remove("title");
    }

    schema
}

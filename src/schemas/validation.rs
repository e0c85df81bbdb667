use crate::error::{AssistantError, Result};
use jsonschema::{Draft, JSONSchema};
use serde_json::Value;

const MAX_SCHEMA_ERRORS: usize = 3;

/// Check tool arguments against the parameter schema the tool declared
pub(crate) fn validate_tool_arguments(
    tool_name: &str,
    schema: &Value,
    arguments: &Value,
) -> Result<()> {
    let validator = JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(schema)
        .map_err(|err| {
            AssistantError::Validation(format!(
                "Failed to prepare parameter schema for `{}`: {}",
                tool_name, err
            ))
        })?;

    if let Err(errors) = validator.validate(arguments) {
        let mut details = Vec::new();
        let mut truncated = false;

        for (idx, error) in errors.enumerate() {
            if idx < MAX_SCHEMA_ERRORS {
                let mut path = error.instance_path.to_string();
                if path.is_empty() {
                    path = "<root>".to_string();
                }
                details.push(format!("{}: {}", path, error));
            } else {
                truncated = true;
                break;
            }
        }

        let mut detail_str = if details.is_empty() {
            "arguments failed schema validation".to_string()
        } else {
            details.join("; ")
        };

        if truncated {
            detail_str.push_str("; additional errors truncated");
        }

        return Err(AssistantError::InvalidFunctionCall(format!(
            "Arguments for `{}` do not match its parameters: {}",
            tool_name, detail_str
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn booking_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "train": { "type": "string" }
            },
            "required": ["train"]
        })
    }

    #[test]
    fn test_accepts_matching_arguments() {
        assert!(
            validate_tool_arguments("bookTicket", &booking_schema(), &json!({"train": "Rajdhani"}))
                .is_ok()
        );
    }

    #[test]
    fn test_rejects_missing_required() {
        let err = validate_tool_arguments("bookTicket", &booking_schema(), &json!({}))
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_FUNCTION_CALL");
        assert!(err.to_string().contains("train"));
    }

    #[test]
    fn test_rejects_wrong_type() {
        let err = validate_tool_arguments("bookTicket", &booking_schema(), &json!({"train": 12}))
            .unwrap_err();
        assert!(err.to_string().contains("/train"));
    }
}

use rmcp::model::{CallToolResult, Content, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::errors::{McpError, invalid_input};
use crate::graphql::Executable;
use crate::json_schema::schema_from_type;
use crate::tools::{check_non_empty, parse_input};

pub const REMOVE_CONTRIBUTION_TOOL_NAME: &str = "remove_contribution";

const REMOVE_CONTRIBUTION_OPERATION: &str = r#"
  mutation DeleteContribution($id: String!) {
    deleteContribution(id: $id) {
      id
    }
  }
"#;

#[derive(Clone)]
pub struct RemoveContribution {
    pub tool: Tool,
}

/// Input for the remove_contribution tool
#[derive(JsonSchema, Deserialize)]
struct Input {
    /// ID of the contribution to delete
    id: String,
}

impl RemoveContribution {
    pub fn new() -> Self {
        Self {
            tool: Tool::new(
                REMOVE_CONTRIBUTION_TOOL_NAME,
                "Delete a contribution from your GitHub Stars profile.",
                schema_from_type::<Input>(),
            ),
        }
    }
}

impl Default for RemoveContribution {
    fn default() -> Self {
        Self::new()
    }
}

impl Executable for RemoveContribution {
    fn operation(&self) -> &'static str {
        REMOVE_CONTRIBUTION_OPERATION
    }

    fn response_field(&self) -> &'static str {
        "deleteContribution"
    }

    fn variables(&self, input: Value) -> Result<Value, McpError> {
        let input: Input = parse_input(input)?;

        let mut violations = Vec::new();
        check_non_empty("id", &input.id, &mut violations);
        if !violations.is_empty() {
            return Err(invalid_input(violations));
        }

        Ok(json!({ "id": input.id }))
    }

    fn response(&self, data: Value) -> Result<CallToolResult, McpError> {
        let id = data
            .pointer("/deleteContribution/id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Ok(CallToolResult {
            content: vec![Content::text(format!(
                "Successfully deleted contribution with ID: {id}"
            ))],
            is_error: None,
        })
    }
}

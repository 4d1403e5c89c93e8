use rmcp::model::{CallToolResult, Content, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::errors::{McpError, invalid_input};
use crate::graphql::Executable;
use crate::json_schema::schema_from_type;
use crate::tools::{check_non_empty, parse_input};

pub const REMOVE_LINK_TOOL_NAME: &str = "remove_link";

const REMOVE_LINK_OPERATION: &str = r#"
  mutation DeleteLink($id: String!) {
    deleteLink(id: $id) {
      id
    }
  }
"#;

#[derive(Clone)]
pub struct RemoveLink {
    pub tool: Tool,
}

/// Input for the remove_link tool
#[derive(JsonSchema, Deserialize)]
struct Input {
    /// ID of the link to delete
    id: String,
}

impl RemoveLink {
    pub fn new() -> Self {
        Self {
            tool: Tool::new(
                REMOVE_LINK_TOOL_NAME,
                "Delete a profile link from your GitHub Stars profile.",
                schema_from_type::<Input>(),
            ),
        }
    }
}

impl Default for RemoveLink {
    fn default() -> Self {
        Self::new()
    }
}

impl Executable for RemoveLink {
    fn operation(&self) -> &'static str {
        REMOVE_LINK_OPERATION
    }

    fn response_field(&self) -> &'static str {
        "deleteLink"
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
            .pointer("/deleteLink/id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Ok(CallToolResult {
            content: vec![Content::text(format!(
                "Successfully deleted link with ID: {id}"
            ))],
            is_error: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_embeds_the_deleted_id() {
        let result = RemoveLink::new()
            .response(json!({"deleteLink": {"id": "link-7"}}))
            .unwrap();

        let content = serde_json::to_value(&result.content).unwrap();
        let text = content.pointer("/0/text").and_then(Value::as_str).unwrap();
        assert_eq!(text, "Successfully deleted link with ID: link-7");
    }

    #[test]
    fn rejects_empty_id() {
        assert!(RemoveLink::new().variables(json!({"id": ""})).is_err());
    }
}

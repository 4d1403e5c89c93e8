use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::errors::McpError;
use crate::graphql::Executable;
use crate::json_schema::schema_from_type;
use crate::tools::parse_input;

pub const LIST_LINKS_TOOL_NAME: &str = "list_links";

const LIST_LINKS_OPERATION: &str = r#"
  query {
    links {
      id
      link
      platform
    }
  }
"#;

#[derive(Clone)]
pub struct ListLinks {
    pub tool: Tool,
}

#[derive(JsonSchema, Deserialize)]
struct Input {}

impl ListLinks {
    pub fn new() -> Self {
        Self {
            tool: Tool::new(
                LIST_LINKS_TOOL_NAME,
                "Get all profile links from your GitHub Stars profile.",
                schema_from_type::<Input>(),
            ),
        }
    }
}

impl Default for ListLinks {
    fn default() -> Self {
        Self::new()
    }
}

impl Executable for ListLinks {
    fn operation(&self) -> &'static str {
        LIST_LINKS_OPERATION
    }

    fn response_field(&self) -> &'static str {
        "links"
    }

    fn variables(&self, input: Value) -> Result<Value, McpError> {
        let Input {} = parse_input(input)?;
        Ok(json!({}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sends_empty_variables() {
        assert_eq!(ListLinks::new().variables(Value::Null).unwrap(), json!({}));
    }
}

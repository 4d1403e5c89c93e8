use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::errors::McpError;
use crate::graphql::Executable;
use crate::json_schema::schema_from_type;
use crate::tools::parse_input;

pub const LIST_CONTRIBUTIONS_TOOL_NAME: &str = "list_contributions";

const LIST_CONTRIBUTIONS_OPERATION: &str = r#"
  query AllContributions($pagination: ContributionOffsetPaginationInput) {
    allContributions(pagination: $pagination) {
      id
      title
      type
      date
      url
      description
    }
  }
"#;

#[derive(Clone)]
pub struct ListContributions {
    pub tool: Tool,
}

/// Input for the list_contributions tool
#[derive(JsonSchema, Deserialize)]
struct Input {
    /// Number of contributions to fetch
    first: Option<u32>,

    /// Offset for pagination
    offset: Option<u32>,
}

impl ListContributions {
    pub fn new() -> Self {
        Self {
            tool: Tool::new(
                LIST_CONTRIBUTIONS_TOOL_NAME,
                "Get all your contributions from your GitHub Stars profile.",
                schema_from_type::<Input>(),
            ),
        }
    }
}

impl Default for ListContributions {
    fn default() -> Self {
        Self::new()
    }
}

impl Executable for ListContributions {
    fn operation(&self) -> &'static str {
        LIST_CONTRIBUTIONS_OPERATION
    }

    fn response_field(&self) -> &'static str {
        "allContributions"
    }

    fn variables(&self, input: Value) -> Result<Value, McpError> {
        let input: Input = parse_input(input)?;

        // With no pagination input at all, an explicit null tells the
        // endpoint to return everything. Otherwise only the supplied members
        // are forwarded; the endpoint fills in its own default for the other.
        let pagination = match (input.first, input.offset) {
            (None, None) => Value::Null,
            (first, offset) => {
                let mut pagination = Map::new();
                if let Some(first) = first {
                    pagination.insert(String::from("first"), first.into());
                }
                if let Some(offset) = offset {
                    pagination.insert(String::from("offset"), offset.into());
                }
                Value::Object(pagination)
            }
        };

        Ok(json!({ "pagination": pagination }))
    }
}

use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::errors::McpError;
use crate::graphql::Executable;
use crate::json_schema::schema_from_type;
use crate::tools::parse_input;

pub const SEARCH_STARS_TOOL_NAME: &str = "search_stars";

const SEARCH_STARS_OPERATION: &str = r#"
  query StarsPublicData($featured: Boolean) {
    starsPublicData(featured: $featured) {
      id
      username
      name
      bio
      avatar
      status
      featured
      country
    }
  }
"#;

#[derive(Clone)]
pub struct SearchStars {
    pub tool: Tool,
}

/// Input for the search_stars tool
#[derive(JsonSchema, Deserialize)]
struct Input {
    /// Filter to only featured Stars
    featured: Option<bool>,
}

impl SearchStars {
    pub fn new() -> Self {
        Self {
            tool: Tool::new(
                SEARCH_STARS_TOOL_NAME,
                "Search and list GitHub Stars public data.",
                schema_from_type::<Input>(),
            ),
        }
    }
}

impl Default for SearchStars {
    fn default() -> Self {
        Self::new()
    }
}

impl Executable for SearchStars {
    fn operation(&self) -> &'static str {
        SEARCH_STARS_OPERATION
    }

    fn response_field(&self) -> &'static str {
        "starsPublicData"
    }

    fn variables(&self, input: Value) -> Result<Value, McpError> {
        let input: Input = parse_input(input)?;
        Ok(json!({ "featured": input.featured }))
    }
}

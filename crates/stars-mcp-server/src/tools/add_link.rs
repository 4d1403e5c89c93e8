use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};
use url::Url;

use crate::errors::McpError;
use crate::graphql::Executable;
use crate::json_schema::schema_from_type;
use crate::tools::{Platform, parse_input};

pub const ADD_LINK_TOOL_NAME: &str = "add_link";

const ADD_LINK_OPERATION: &str = r#"
  mutation CreateLink($link: URL, $platform: PlatformType) {
    createLink(data: { link: $link, platform: $platform }) {
      id
      link
      platform
    }
  }
"#;

#[derive(Clone)]
pub struct AddLink {
    pub tool: Tool,
}

/// Input for the add_link tool
#[derive(JsonSchema, Deserialize)]
struct Input {
    /// URL of the profile link
    link: Url,

    /// Platform type for the link
    platform: Platform,
}

impl AddLink {
    pub fn new() -> Self {
        Self {
            tool: Tool::new(
                ADD_LINK_TOOL_NAME,
                "Add a profile link to your GitHub Stars profile.",
                schema_from_type::<Input>(),
            ),
        }
    }
}

impl Default for AddLink {
    fn default() -> Self {
        Self::new()
    }
}

impl Executable for AddLink {
    fn operation(&self) -> &'static str {
        ADD_LINK_OPERATION
    }

    fn response_field(&self) -> &'static str {
        "createLink"
    }

    fn variables(&self, input: Value) -> Result<Value, McpError> {
        let input: Input = parse_input(input)?;
        Ok(json!({
            "link": input.link,
            "platform": input.platform,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_link_and_platform_variables() {
        let variables = AddLink::new()
            .variables(json!({
                "link": "https://dev.to/octocat",
                "platform": "DEV_TO",
            }))
            .unwrap();

        assert_eq!(
            variables,
            json!({"link": "https://dev.to/octocat", "platform": "DEV_TO"})
        );
    }

    #[test]
    fn rejects_relative_url() {
        assert!(
            AddLink::new()
                .variables(json!({"link": "/octocat", "platform": "DEV_TO"}))
                .is_err()
        );
    }

    #[test]
    fn rejects_unknown_platform() {
        let error = AddLink::new()
            .variables(json!({"link": "https://example.com", "platform": "MYSPACE"}))
            .unwrap_err();

        assert!(error.message.contains("Invalid input"));
    }
}

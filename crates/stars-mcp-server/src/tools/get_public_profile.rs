use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::errors::{McpError, invalid_input};
use crate::graphql::Executable;
use crate::json_schema::schema_from_type;
use crate::tools::{check_non_empty, parse_input};

pub const GET_PUBLIC_PROFILE_TOOL_NAME: &str = "get_public_profile";

const GET_PUBLIC_PROFILE_OPERATION: &str = r#"
  query PublicProfile($username: String!) {
    publicProfile(username: $username) {
      id
      username
      name
      bio
      avatar
      status
      featured
      country
      contributions {
        id
        title
        type
        date
        url
        description
      }
      links {
        id
        link
        platform
      }
    }
  }
"#;

#[derive(Clone)]
pub struct GetPublicProfile {
    pub tool: Tool,
}

/// Input for the get_public_profile tool
#[derive(JsonSchema, Deserialize)]
struct Input {
    /// GitHub username of the Star
    username: String,
}

impl GetPublicProfile {
    pub fn new() -> Self {
        Self {
            tool: Tool::new(
                GET_PUBLIC_PROFILE_TOOL_NAME,
                "Get a GitHub Star's public profile by username.",
                schema_from_type::<Input>(),
            ),
        }
    }
}

impl Default for GetPublicProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl Executable for GetPublicProfile {
    fn operation(&self) -> &'static str {
        GET_PUBLIC_PROFILE_OPERATION
    }

    fn response_field(&self) -> &'static str {
        "publicProfile"
    }

    fn variables(&self, input: Value) -> Result<Value, McpError> {
        let input: Input = parse_input(input)?;

        let mut violations = Vec::new();
        check_non_empty("username", &input.username, &mut violations);
        if !violations.is_empty() {
            return Err(invalid_input(violations));
        }

        Ok(json!({ "username": input.username }))
    }
}

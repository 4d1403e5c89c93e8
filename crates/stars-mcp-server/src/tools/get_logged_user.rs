use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::errors::McpError;
use crate::graphql::Executable;
use crate::json_schema::schema_from_type;
use crate::tools::parse_input;

pub const GET_LOGGED_USER_TOOL_NAME: &str = "get_logged_user";

const GET_LOGGED_USER_OPERATION: &str = r#"
  query {
    loggedUser {
      id
      username
      avatar
      email
      nominee {
        status
        name
        bio
        featured
        country
        jobTitle
        company
      }
    }
  }
"#;

#[derive(Clone)]
pub struct GetLoggedUser {
    pub tool: Tool,
}

#[derive(JsonSchema, Deserialize)]
struct Input {}

impl GetLoggedUser {
    pub fn new() -> Self {
        Self {
            tool: Tool::new(
                GET_LOGGED_USER_TOOL_NAME,
                "Get information about the currently logged-in user.",
                schema_from_type::<Input>(),
            ),
        }
    }
}

impl Default for GetLoggedUser {
    fn default() -> Self {
        Self::new()
    }
}

impl Executable for GetLoggedUser {
    fn operation(&self) -> &'static str {
        GET_LOGGED_USER_OPERATION
    }

    fn response_field(&self) -> &'static str {
        "loggedUser"
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
        assert_eq!(
            GetLoggedUser::new().variables(Value::Null).unwrap(),
            json!({})
        );
    }
}

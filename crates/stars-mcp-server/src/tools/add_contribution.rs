use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};
use url::Url;

use crate::errors::{McpError, invalid_input};
use crate::graphql::Executable;
use crate::json_schema::schema_from_type;
use crate::tools::{ContributionType, check_non_empty, normalize_date, parse_input};

pub const ADD_CONTRIBUTION_TOOL_NAME: &str = "add_contribution";

const ADD_CONTRIBUTION_OPERATION: &str = r#"
  mutation AddContribution(
    $type: ContributionType!
    $date: GraphQLDateTime!
    $title: String!
    $url: URL
    $description: String!
  ) {
    createContribution(
      data: {
        date: $date
        url: $url
        type: $type
        title: $title
        description: $description
      }
    ) {
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
pub struct AddContribution {
    pub tool: Tool,
}

/// Input for the add_contribution tool
#[derive(JsonSchema, Deserialize)]
struct Input {
    /// Type of contribution
    #[serde(rename = "type")]
    contribution_type: ContributionType,

    /// Title of the contribution
    title: String,

    /// Description of the contribution
    description: String,

    /// URL related to the contribution
    url: Option<Url>,

    /// Date of the contribution (YYYY-MM-DD or RFC 3339)
    date: String,
}

impl AddContribution {
    pub fn new() -> Self {
        Self {
            tool: Tool::new(
                ADD_CONTRIBUTION_TOOL_NAME,
                "Add a new contribution to your GitHub Stars profile.",
                schema_from_type::<Input>(),
            ),
        }
    }
}

impl Default for AddContribution {
    fn default() -> Self {
        Self::new()
    }
}

impl Executable for AddContribution {
    fn operation(&self) -> &'static str {
        ADD_CONTRIBUTION_OPERATION
    }

    fn response_field(&self) -> &'static str {
        "createContribution"
    }

    fn variables(&self, input: Value) -> Result<Value, McpError> {
        let input: Input = parse_input(input)?;

        let mut violations = Vec::new();
        check_non_empty("title", &input.title, &mut violations);
        check_non_empty("description", &input.description, &mut violations);
        let date = match normalize_date(&input.date) {
            Ok(date) => Some(date),
            Err(violation) => {
                violations.push(violation);
                None
            }
        };
        if !violations.is_empty() {
            return Err(invalid_input(violations));
        }

        Ok(json!({
            "type": input.contribution_type,
            "title": input.title,
            "description": input.description,
            "url": input.url,
            "date": date,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_variables_with_normalized_date_and_explicit_null_url() {
        let variables = AddContribution::new()
            .variables(json!({
                "type": "SPEAKING",
                "title": "RustConf keynote",
                "description": "Opening talk",
                "date": "2024-09-10",
            }))
            .unwrap();

        assert_eq!(
            variables,
            json!({
                "type": "SPEAKING",
                "title": "RustConf keynote",
                "description": "Opening talk",
                "url": null,
                "date": "2024-09-10T00:00:00.000Z",
            })
        );
    }

    #[test]
    fn accepts_a_full_timestamp() {
        let variables = AddContribution::new()
            .variables(json!({
                "type": "BLOGPOST",
                "title": "Async in practice",
                "description": "A post",
                "url": "https://example.com/post",
                "date": "2024-09-10T18:00:00Z",
            }))
            .unwrap();

        assert_eq!(variables.get("date").unwrap(), "2024-09-10T18:00:00.000Z");
        assert_eq!(variables.get("url").unwrap(), "https://example.com/post");
    }

    #[test]
    fn rejects_out_of_enum_contribution_type() {
        let error = AddContribution::new()
            .variables(json!({
                "type": "PAINTING",
                "title": "t",
                "description": "d",
                "date": "2024-09-10",
            }))
            .unwrap_err();

        assert!(error.message.contains("Invalid input"));
    }

    #[test]
    fn rejects_malformed_url() {
        assert!(
            AddContribution::new()
                .variables(json!({
                    "type": "SPEAKING",
                    "title": "t",
                    "description": "d",
                    "url": "not a url",
                    "date": "2024-09-10",
                }))
                .is_err()
        );
    }

    #[test]
    fn reports_all_field_violations_at_once() {
        let error = AddContribution::new()
            .variables(json!({
                "type": "SPEAKING",
                "title": "",
                "description": "",
                "date": "someday",
            }))
            .unwrap_err();

        assert!(error.message.contains("title"));
        assert!(error.message.contains("description"));
        assert!(error.message.contains("date"));
    }

    #[test]
    fn input_schema_marks_required_fields() {
        let tool = AddContribution::new().tool;
        let required = tool
            .input_schema
            .get("required")
            .and_then(Value::as_array)
            .unwrap()
            .clone();

        for field in ["type", "title", "description", "date"] {
            assert!(required.contains(&json!(field)), "{field} must be required");
        }
        assert!(!required.contains(&json!("url")));
    }
}

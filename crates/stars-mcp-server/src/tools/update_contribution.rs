use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};
use url::Url;

use crate::errors::{McpError, invalid_input};
use crate::graphql::Executable;
use crate::json_schema::schema_from_type;
use crate::tools::{ContributionType, check_non_empty, normalize_date, parse_input};

pub const UPDATE_CONTRIBUTION_TOOL_NAME: &str = "update_contribution";

const UPDATE_CONTRIBUTION_OPERATION: &str = r#"
  mutation UpdateContribution(
    $id: String!
    $type: ContributionType
    $date: GraphQLDateTime
    $title: String
    $url: URL
    $description: String
  ) {
    updateContribution(
      id: $id
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
pub struct UpdateContribution {
    pub tool: Tool,
}

/// Input for the update_contribution tool. Fields left out are sent to the
/// endpoint as explicit nulls, which the API treats as "leave unchanged".
#[derive(JsonSchema, Deserialize)]
struct Input {
    /// ID of the contribution to update
    id: String,

    /// Type of contribution
    #[serde(rename = "type")]
    contribution_type: Option<ContributionType>,

    /// Title of the contribution
    title: Option<String>,

    /// Description of the contribution
    description: Option<String>,

    /// URL related to the contribution
    url: Option<Url>,

    /// Date of the contribution (YYYY-MM-DD or RFC 3339)
    date: Option<String>,
}

impl UpdateContribution {
    pub fn new() -> Self {
        Self {
            tool: Tool::new(
                UPDATE_CONTRIBUTION_TOOL_NAME,
                "Update an existing contribution on your GitHub Stars profile.",
                schema_from_type::<Input>(),
            ),
        }
    }
}

impl Default for UpdateContribution {
    fn default() -> Self {
        Self::new()
    }
}

impl Executable for UpdateContribution {
    fn operation(&self) -> &'static str {
        UPDATE_CONTRIBUTION_OPERATION
    }

    fn response_field(&self) -> &'static str {
        "updateContribution"
    }

    fn variables(&self, input: Value) -> Result<Value, McpError> {
        let input: Input = parse_input(input)?;

        let mut violations = Vec::new();
        check_non_empty("id", &input.id, &mut violations);
        if let Some(title) = &input.title {
            check_non_empty("title", title, &mut violations);
        }
        if let Some(description) = &input.description {
            check_non_empty("description", description, &mut violations);
        }
        let date = match input.date.as_deref() {
            Some(raw) => match normalize_date(raw) {
                Ok(date) => Some(date),
                Err(violation) => {
                    violations.push(violation);
                    None
                }
            },
            None => None,
        };
        if !violations.is_empty() {
            return Err(invalid_input(violations));
        }

        Ok(json!({
            "id": input.id,
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
    fn omitted_fields_become_explicit_nulls() {
        let variables = UpdateContribution::new()
            .variables(json!({"id": "c1", "title": "New title"}))
            .unwrap();

        assert_eq!(
            variables,
            json!({
                "id": "c1",
                "type": null,
                "title": "New title",
                "description": null,
                "url": null,
                "date": null,
            })
        );
    }

    #[test]
    fn present_date_is_normalized() {
        let variables = UpdateContribution::new()
            .variables(json!({"id": "c1", "date": "2024-03-01"}))
            .unwrap();

        assert_eq!(variables.get("date").unwrap(), "2024-03-01T00:00:00.000Z");
    }

    #[test]
    fn rejects_invalid_date() {
        let error = UpdateContribution::new()
            .variables(json!({"id": "c1", "date": "next week"}))
            .unwrap_err();

        assert!(error.message.contains("date"));
    }

    #[test]
    fn rejects_present_but_empty_title() {
        assert!(
            UpdateContribution::new()
                .variables(json!({"id": "c1", "title": ""}))
                .is_err()
        );
    }

    #[test]
    fn only_id_is_required_in_the_schema() {
        let tool = UpdateContribution::new().tool;
        assert_eq!(
            tool.input_schema.get("required").unwrap(),
            &json!(["id"])
        );
    }
}

//! The fixed catalog of tools exposed over MCP, one module per tool.

use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};
use rmcp::model::ErrorCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::McpError;

pub mod add_contribution;
pub mod add_link;
pub mod get_logged_user;
pub mod get_public_profile;
pub mod list_contributions;
pub mod list_links;
pub mod remove_contribution;
pub mod remove_link;
pub mod search_stars;
pub mod update_contribution;

/// Categories of contribution recognized by the Stars program
#[derive(Clone, Copy, Debug, Deserialize, Serialize, schemars::JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContributionType {
    Speaking,
    Blogpost,
    ArticlePublication,
    EventOrganization,
    Hackathon,
    OpenSourceProject,
    VideoPodcast,
    Forum,
    Other,
}

/// Platforms a profile link can point to
#[derive(Clone, Copy, Debug, Deserialize, Serialize, schemars::JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Platform {
    Twitter,
    Medium,
    Linkedin,
    Readme,
    StackOverflow,
    DevTo,
    Mastodon,
    Other,
}

/// Deserialize raw tool-call arguments into a tool's typed input.
///
/// Tools with no required arguments may be called with no argument object
/// at all, so a missing object is treated as an empty one.
pub(crate) fn parse_input<T: serde::de::DeserializeOwned>(input: Value) -> Result<T, McpError> {
    let input = match input {
        Value::Null => Value::Object(Map::new()),
        other => other,
    };
    serde_json::from_value(input).map_err(|error| {
        McpError::new(
            ErrorCode::INVALID_PARAMS,
            format!("Invalid input: {error}"),
            None,
        )
    })
}

pub(crate) fn check_non_empty(field: &str, value: &str, violations: &mut Vec<String>) {
    if value.is_empty() {
        violations.push(format!("{field} must be a non-empty string"));
    }
}

/// Normalize a `YYYY-MM-DD` date or RFC 3339 timestamp to a UTC timestamp
/// string, millisecond precision, `Z` suffix. Plain dates become midnight UTC.
pub(crate) fn normalize_date(input: &str) -> Result<String, String> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Ok(timestamp
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Millis, true));
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(|date| {
            date.and_time(NaiveTime::MIN)
                .and_utc()
                .to_rfc3339_opts(SecondsFormat::Millis, true)
        })
        .map_err(|_| format!("date must be a YYYY-MM-DD date or an RFC 3339 timestamp: {input}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("2024-01-15", "2024-01-15T00:00:00.000Z")]
    #[case("2024-01-15T10:30:00Z", "2024-01-15T10:30:00.000Z")]
    #[case("2024-01-15T10:30:00.500Z", "2024-01-15T10:30:00.500Z")]
    #[case("2024-01-15T10:30:00+02:00", "2024-01-15T08:30:00.000Z")]
    fn normalizes_dates_to_utc_timestamps(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_date(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("yesterday")]
    #[case("15/01/2024")]
    #[case("2024-01-15T10:30:00")] // timezone-less timestamps are rejected
    fn rejects_unparseable_dates(#[case] input: &str) {
        assert!(normalize_date(input).is_err());
    }

    #[test]
    fn contribution_types_use_api_names() {
        assert_eq!(
            serde_json::to_value(ContributionType::ArticlePublication).unwrap(),
            json!("ARTICLE_PUBLICATION")
        );
        assert_eq!(
            serde_json::to_value(ContributionType::VideoPodcast).unwrap(),
            json!("VIDEO_PODCAST")
        );
        assert!(serde_json::from_value::<ContributionType>(json!("PAINTING")).is_err());
    }

    #[test]
    fn platforms_use_api_names() {
        assert_eq!(
            serde_json::to_value(Platform::StackOverflow).unwrap(),
            json!("STACK_OVERFLOW")
        );
        assert_eq!(
            serde_json::to_value(Platform::DevTo).unwrap(),
            json!("DEV_TO")
        );
        assert!(serde_json::from_value::<Platform>(json!("MYSPACE")).is_err());
    }

    #[test]
    fn missing_argument_object_is_an_empty_object() {
        #[derive(serde::Deserialize)]
        struct Empty {}

        assert!(parse_input::<Empty>(Value::Null).is_ok());
    }
}

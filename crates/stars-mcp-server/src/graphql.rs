//! Execute GraphQL operations from an MCP tool

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use rmcp::model::{CallToolResult, Content, ErrorCode};
use serde_json::{Value, json};
use tracing::debug;
use url::Url;

use crate::errors::{GraphQLError, McpError, ServerError};

/// Issues GraphQL operations against the Stars API endpoint.
///
/// One HTTP POST per operation, no retries, no caching. The bearer
/// credential is fixed at construction time.
pub struct GraphQLClient {
    endpoint: Url,
    headers: HeaderMap,
    client: reqwest::Client,
}

impl GraphQLClient {
    pub fn new(endpoint: Url, token: &str) -> Result<Self, ServerError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut authorization = HeaderValue::from_str(&format!("Bearer {token}"))?;
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION, authorization);
        Ok(Self {
            endpoint,
            headers,
            client: reqwest::Client::new(),
        })
    }

    /// Execute a single operation and return the `data` member of the
    /// decoded response.
    ///
    /// A response carrying a non-empty `errors` list fails with
    /// [`GraphQLError::Endpoint`], even when partial data is present.
    pub async fn execute(&self, operation: &str, variables: Value) -> Result<Value, GraphQLError> {
        debug!(endpoint = %self.endpoint, "Sending GraphQL request");
        let mut response = self
            .client
            .post(self.endpoint.clone())
            .headers(self.headers.clone())
            .body(
                json!({
                    "query": operation,
                    "variables": variables,
                })
                .to_string(),
            )
            .send()
            .await
            .map_err(GraphQLError::Request)?
            .json::<Value>()
            .await
            .map_err(GraphQLError::Response)?;

        if let Some(errors) = response
            .get("errors")
            .and_then(Value::as_array)
            .filter(|errors| !errors.is_empty())
        {
            let message = errors
                .iter()
                .filter_map(|error| error.get("message"))
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            return Err(GraphQLError::Endpoint(message));
        }

        Ok(response
            .get_mut("data")
            .map(Value::take)
            .unwrap_or(Value::Null))
    }
}

/// Able to be executed as a GraphQL operation
pub trait Executable {
    /// Get the fixed GraphQL document for this tool
    fn operation(&self) -> &'static str;

    /// Get the member of the response `data` object relayed to the caller
    fn response_field(&self) -> &'static str;

    /// Validate the tool input and build the operation variables
    fn variables(&self, input: Value) -> Result<Value, McpError>;

    /// Format the response data as a tool result
    fn response(&self, mut data: Value) -> Result<CallToolResult, McpError> {
        let field = data
            .get_mut(self.response_field())
            .map(Value::take)
            .unwrap_or(Value::Null);
        let text = serde_json::to_string_pretty(&field).map_err(|error| {
            McpError::new(
                ErrorCode::INTERNAL_ERROR,
                format!("Failed to serialize GraphQL response: {error}"),
                None,
            )
        })?;
        Ok(CallToolResult {
            content: vec![Content::text(text)],
            is_error: None,
        })
    }

    /// Execute as a GraphQL operation using the given client
    async fn execute(
        &self,
        client: &GraphQLClient,
        input: Value,
    ) -> Result<CallToolResult, McpError> {
        let variables = self.variables(input)?;
        let data = client.execute(self.operation(), variables).await?;
        self.response(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client(endpoint: &str) -> GraphQLClient {
        GraphQLClient::new(endpoint.parse().unwrap(), "test-token").unwrap()
    }

    #[tokio::test]
    async fn returns_the_data_member_on_success() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .match_header("content-type", "application/json")
            .match_header("authorization", "Bearer test-token")
            .with_body(r#"{"data": {"links": []}}"#)
            .create_async()
            .await;

        let data = client(&server.url())
            .execute("query { links { id } }", json!({}))
            .await
            .unwrap();

        assert_eq!(data, json!({"links": []}));
    }

    #[tokio::test]
    async fn joins_endpoint_error_messages() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_body(r#"{"errors": [{"message": "A"}, {"message": "B"}]}"#)
            .create_async()
            .await;

        let error = client(&server.url())
            .execute("query { links { id } }", json!({}))
            .await
            .unwrap_err();

        assert!(matches!(error, GraphQLError::Endpoint(_)));
        assert_eq!(error.to_string(), "A, B");
    }

    #[tokio::test]
    async fn endpoint_errors_win_over_partial_data() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_body(r#"{"data": {"links": null}, "errors": [{"message": "denied"}]}"#)
            .create_async()
            .await;

        let error = client(&server.url())
            .execute("query { links { id } }", json!({}))
            .await
            .unwrap_err();

        assert_eq!(error.to_string(), "denied");
    }

    #[tokio::test]
    async fn non_json_body_is_a_response_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let error = client(&server.url())
            .execute("query { links { id } }", json!({}))
            .await
            .unwrap_err();

        assert!(matches!(error, GraphQLError::Response(_)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_request_error() {
        // nothing listens on this port
        let error = client("http://127.0.0.1:9")
            .execute("query { links { id } }", json!({}))
            .await
            .unwrap_err();

        assert!(matches!(error, GraphQLError::Request(_)));
    }
}

use reqwest::header::InvalidHeaderValue;
use rmcp::model::ErrorCode;
use tokio::task::JoinError;

/// An error in server initialization
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Missing environment variable: {0}")]
    EnvironmentVariable(String),

    #[error("invalid header value: {0}")]
    HeaderValue(#[from] InvalidHeaderValue),

    #[error("Failed to start server")]
    StartupError(#[from] JoinError),
}

/// An error executing a GraphQL operation
#[derive(Debug, thiserror::Error)]
pub enum GraphQLError {
    /// The request never produced a response
    #[error("Failed to send GraphQL request: {0}")]
    Request(reqwest::Error),

    /// The response body could not be decoded as JSON
    #[error("Failed to read GraphQL response body: {0}")]
    Response(reqwest::Error),

    /// The endpoint returned a well-formed response carrying errors.
    /// The message is the concatenation of all reported error messages.
    #[error("{0}")]
    Endpoint(String),
}

/// An MCP tool error
pub type McpError = rmcp::model::ErrorData;

impl From<GraphQLError> for McpError {
    fn from(error: GraphQLError) -> Self {
        McpError::new(ErrorCode::INTERNAL_ERROR, error.to_string(), None)
    }
}

/// Build a validation failure from a list of field-level violations
pub fn invalid_input(violations: Vec<String>) -> McpError {
    McpError::new(ErrorCode::INVALID_PARAMS, violations.join("; "), None)
}

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, ErrorCode, Implementation, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler};
use serde_json::Value;

use crate::errors::McpError;
use crate::graphql::{Executable as _, GraphQLClient};
use crate::tools::add_contribution::{ADD_CONTRIBUTION_TOOL_NAME, AddContribution};
use crate::tools::add_link::{ADD_LINK_TOOL_NAME, AddLink};
use crate::tools::get_logged_user::{GET_LOGGED_USER_TOOL_NAME, GetLoggedUser};
use crate::tools::get_public_profile::{GET_PUBLIC_PROFILE_TOOL_NAME, GetPublicProfile};
use crate::tools::list_contributions::{LIST_CONTRIBUTIONS_TOOL_NAME, ListContributions};
use crate::tools::list_links::{LIST_LINKS_TOOL_NAME, ListLinks};
use crate::tools::remove_contribution::{REMOVE_CONTRIBUTION_TOOL_NAME, RemoveContribution};
use crate::tools::remove_link::{REMOVE_LINK_TOOL_NAME, RemoveLink};
use crate::tools::search_stars::{SEARCH_STARS_TOOL_NAME, SearchStars};
use crate::tools::update_contribution::{UPDATE_CONTRIBUTION_TOOL_NAME, UpdateContribution};

const SERVER_INSTRUCTIONS: &str =
    "Use this server to manage GitHub Stars contributions, profile links, and query public profiles.";

/// An MCP server exposing the Stars API tool catalog
#[derive(Clone)]
pub struct StarsServer {
    client: Arc<GraphQLClient>,
    add_contribution: AddContribution,
    remove_contribution: RemoveContribution,
    update_contribution: UpdateContribution,
    list_contributions: ListContributions,
    add_link: AddLink,
    remove_link: RemoveLink,
    list_links: ListLinks,
    get_public_profile: GetPublicProfile,
    search_stars: SearchStars,
    get_logged_user: GetLoggedUser,
}

impl StarsServer {
    pub fn new(client: GraphQLClient) -> Self {
        Self {
            client: Arc::new(client),
            add_contribution: AddContribution::new(),
            remove_contribution: RemoveContribution::new(),
            update_contribution: UpdateContribution::new(),
            list_contributions: ListContributions::new(),
            add_link: AddLink::new(),
            remove_link: RemoveLink::new(),
            list_links: ListLinks::new(),
            get_public_profile: GetPublicProfile::new(),
            search_stars: SearchStars::new(),
            get_logged_user: GetLoggedUser::new(),
        }
    }

    fn tools(&self) -> Vec<Tool> {
        vec![
            self.add_contribution.tool.clone(),
            self.remove_contribution.tool.clone(),
            self.update_contribution.tool.clone(),
            self.list_contributions.tool.clone(),
            self.add_link.tool.clone(),
            self.remove_link.tool.clone(),
            self.list_links.tool.clone(),
            self.get_public_profile.tool.clone(),
            self.search_stars.tool.clone(),
            self.get_logged_user.tool.clone(),
        ]
    }
}

impl ServerHandler for StarsServer {
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let input = Value::from(request.arguments.clone());
        match request.name.as_ref() {
            ADD_CONTRIBUTION_TOOL_NAME => self.add_contribution.execute(&self.client, input).await,
            REMOVE_CONTRIBUTION_TOOL_NAME => {
                self.remove_contribution.execute(&self.client, input).await
            }
            UPDATE_CONTRIBUTION_TOOL_NAME => {
                self.update_contribution.execute(&self.client, input).await
            }
            LIST_CONTRIBUTIONS_TOOL_NAME => {
                self.list_contributions.execute(&self.client, input).await
            }
            ADD_LINK_TOOL_NAME => self.add_link.execute(&self.client, input).await,
            REMOVE_LINK_TOOL_NAME => self.remove_link.execute(&self.client, input).await,
            LIST_LINKS_TOOL_NAME => self.list_links.execute(&self.client, input).await,
            GET_PUBLIC_PROFILE_TOOL_NAME => {
                self.get_public_profile.execute(&self.client, input).await
            }
            SEARCH_STARS_TOOL_NAME => self.search_stars.execute(&self.client, input).await,
            GET_LOGGED_USER_TOOL_NAME => self.get_logged_user.execute(&self.client, input).await,
            _ => Err(tool_not_found(&request.name)),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            next_cursor: None,
            tools: self.tools(),
        })
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "Stars MCP Server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }
}

fn tool_not_found(name: &str) -> McpError {
    McpError::new(
        ErrorCode::METHOD_NOT_FOUND,
        format!("Tool {name} not found"),
        None,
    )
}

use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use stars_mcp_server::errors::ServerError;
use stars_mcp_server::graphql::GraphQLClient;
use stars_mcp_server::server::StarsServer;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;
use url::Url;

/// Clap styling
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// Arguments to the MCP server
#[derive(Debug, clap::Parser)]
#[command(
    styles = STYLES,
    about = "Stars MCP Server - manage GitHub Stars contributions from an AI agent",
)]
struct Args {
    /// The GraphQL endpoint the server will invoke
    #[clap(long, short = 'e', default_value = "https://api-stars.github.com/")]
    endpoint: Url,

    /// The bearer token used to authenticate with the Stars API
    #[clap(long, env = "GITHUB_STARS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// The log level for the MCP server
    #[clap(long = "log", short = 'l', default_value_t = Level::INFO)]
    log_level: Level,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Send output to stderr since stdout is used for MCP messages
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(args.log_level.into()))
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .init();

    info!("Stars MCP Server v{}", std::env!("CARGO_PKG_VERSION"));

    // The credential is resolved exactly once; without it no tool may ever
    // become callable.
    let token = args.token.ok_or(ServerError::EnvironmentVariable(String::from(
        "GITHUB_STARS_TOKEN",
    )))?;
    let client = GraphQLClient::new(args.endpoint, &token)?;
    let server = StarsServer::new(client);

    info!("Starting MCP server in stdio mode");
    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {:?}", e);
    })?;
    service.waiting().await.map_err(ServerError::StartupError)?;

    Ok(())
}

//! One-shot introspection of the Stars API schema, for development use.
//! Prints a filtered listing of type and field names to stdout.

use clap::Parser;
use serde_json::{Map, Value};
use stars_mcp_server::errors::ServerError;
use stars_mcp_server::graphql::GraphQLClient;
use url::Url;

const INTROSPECTION_OPERATION: &str = r#"
  query IntrospectionQuery {
    __schema {
      types {
        name
        kind
        fields {
          name
          type {
            name
            kind
            ofType {
              name
              kind
            }
          }
        }
      }
    }
  }
"#;

const RELEVANT_TYPES: &[&str] = &[
    "User",
    "StarPublicData",
    "Contribution",
    "Link",
    "Query",
    "Mutation",
];

/// Arguments to the introspection utility
#[derive(Debug, clap::Parser)]
#[command(about = "Print a filtered listing of the Stars API schema")]
struct Args {
    /// The GraphQL endpoint to introspect
    #[clap(long, short = 'e', default_value = "https://api-stars.github.com/")]
    endpoint: Url,

    /// The bearer token used to authenticate with the Stars API
    #[clap(long, env = "GITHUB_STARS_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

fn relevant(name: &str) -> bool {
    let lowercase = name.to_lowercase();
    RELEVANT_TYPES.contains(&name)
        || lowercase.contains("star")
        || lowercase.contains("profile")
        || lowercase.contains("user")
}

fn field_type(field: &Value) -> String {
    let ty = field.get("type");
    if let Some(name) = ty.and_then(|t| t.get("name")).and_then(Value::as_str) {
        return name.to_string();
    }
    let kind = ty
        .and_then(|t| t.get("kind"))
        .and_then(Value::as_str)
        .unwrap_or("UNKNOWN");
    match ty
        .and_then(|t| t.pointer("/ofType/name"))
        .and_then(Value::as_str)
    {
        Some(inner) => format!("{kind}<{inner}>"),
        None => kind.to_string(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let token = args.token.ok_or(ServerError::EnvironmentVariable(String::from(
        "GITHUB_STARS_TOKEN",
    )))?;
    let client = GraphQLClient::new(args.endpoint, &token)?;
    let data = client
        .execute(INTROSPECTION_OPERATION, Value::Object(Map::new()))
        .await?;

    let types = data
        .pointer("/__schema/types")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    for ty in &types {
        let Some(name) = ty.get("name").and_then(Value::as_str) else {
            continue;
        };
        if !relevant(name) {
            continue;
        }
        let Some(fields) = ty.get("fields").and_then(Value::as_array) else {
            continue;
        };
        let kind = ty.get("kind").and_then(Value::as_str).unwrap_or("UNKNOWN");
        println!("\n=== {name} ({kind}) ===");
        for field in fields {
            let field_name = field.get("name").and_then(Value::as_str).unwrap_or_default();
            println!("  {field_name}: {}", field_type(field));
        }
    }

    Ok(())
}

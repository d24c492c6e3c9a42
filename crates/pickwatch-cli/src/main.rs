//! Command-line client for the pickwatch tool server.
//!
//! Connects to the configured server, verifies the collect tool is
//! registered, invokes it, and prints the structured result as formatted
//! JSON. Connection and registration failures go to stderr with a hint on
//! how to start the server, and the process exits non-zero.


use clap::Parser;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

const TOOL_NAME: &str = "collect_pickpocket_reports";
const DEFAULT_SERVER: &str = "http://127.0.0.1:8000/mcp";

#[derive(Debug, Parser)]
#[command(name = "pickwatch-cli")]
#[command(about = "Collect recent pickpocket incident reports via the pickwatch tool server")]
struct Cli {
    /// Additional keywords or location filters to refine the pickpocket search.
    #[arg(long)]
    query: Option<String>,

    /// Maximum number of reports to keep from the feed (1-25).
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(i64).range(1..=25))]
    max_results: i64,

    /// Base URL of the pickwatch tool server.
    #[arg(long, default_value = DEFAULT_SERVER)]
    server: String,
}

#[derive(Debug, Deserialize)]
struct ToolInfo {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ToolListData {
    tools: Vec<ToolInfo>,
}

/// Ensure bare HTTP(S) base URLs include the default `/mcp` path.
///
/// Values that do not parse as URLs, or that already carry a path, are
/// returned unchanged.
fn normalize_server(value: &str) -> String {
    match Url::parse(value) {
        Ok(mut url)
            if matches!(url.scheme(), "http" | "https")
                && matches!(url.path(), "" | "/") =>
        {
            url.set_path("/mcp");
            url.to_string()
        }
        _ => value.to_string(),
    }
}

/// Build the tool arguments object. Any non-empty query is forwarded as-is;
/// trimming and whitespace-only handling are the server's concern.
fn build_arguments(query: Option<&str>, max_results: i64) -> Value {
    let mut arguments = serde_json::json!({ "max_results": max_results });
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        arguments["query"] = Value::String(query.to_string());
    }
    arguments
}

async fn run(server: &str, query: Option<&str>, max_results: i64) -> anyhow::Result<Value> {
    let client = reqwest::Client::new();

    let list: ToolListData = client
        .get(format!("{server}/tools"))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let mut names: Vec<&str> = list.tools.iter().map(|t| t.name.as_str()).collect();
    if !names.contains(&TOOL_NAME) {
        names.sort_unstable();
        let available = if names.is_empty() {
            "none".to_string()
        } else {
            names.join(", ")
        };
        anyhow::bail!("tool '{TOOL_NAME}' is not registered. Available tools: {available}");
    }

    let arguments = build_arguments(query, max_results);

    tracing::debug!(server = %server, tool = TOOL_NAME, "invoking collect tool");
    let result: Value = client
        .post(format!("{server}/tools/{TOOL_NAME}"))
        .json(&arguments)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(result)
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let server = normalize_server(&cli.server);

    match run(&server, cli.query.as_deref(), cli.max_results).await {
        Ok(result) => {
            let rendered = serde_json::to_string_pretty(&result)
                .unwrap_or_else(|_| result.to_string());
            println!("{rendered}");
        }
        Err(e) => {
            eprintln!("Failed to reach pickwatch server via '{server}': {e:#}");
            eprintln!(
                "Ensure the server is running (e.g. `pickwatch-server`, bound via PICKWATCH_BIND_ADDR)."
            );
            std::process::exit(1);
        }
    }
}

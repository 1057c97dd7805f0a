use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use context7_mcp::client::{DEFAULT_BASE_URL, DEFAULT_SOURCE};
use context7_mcp::logging::{self, LogConfig, ToolLogger};
use context7_mcp::{state::AppState, tools};
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;
use tower_mcp::{HttpTransport, McpRouter, McpTracingLayer, StdioTransport};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Transport {
    Stdio,
    Http,
}

#[derive(Parser, Debug)]
#[command(name = "context7-mcp")]
#[command(version, about = "MCP server for the Context7 documentation API", long_about = None)]
struct Args {
    /// Transport to use
    #[arg(short, long, default_value = "stdio")]
    transport: Transport,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Directory for the daily rolling log file
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,

    /// Log to stderr only
    #[arg(long, default_value = "false")]
    no_log_file: bool,

    /// Context7 API base URL
    #[arg(long, env = "CONTEXT7_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Value of the X-Context7-Source header sent with documentation requests
    #[arg(long, env = "CONTEXT7_SOURCE", default_value = DEFAULT_SOURCE)]
    source: String,

    /// HTTP host to bind to (use 0.0.0.0 for public access)
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// HTTP port to bind to
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Request timeout in seconds (for HTTP transport)
    #[arg(long, default_value = "30")]
    request_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), tower_mcp::BoxError> {
    let args = Args::parse();

    let log_config = LogConfig {
        level: args.log_level.clone(),
        dir: (!args.no_log_file).then(|| args.log_dir.clone()),
    };
    // Flushes the file writer when main returns.
    let _log_guard = logging::init(&log_config)?;

    tracing::info!(
        transport = ?args.transport,
        api_url = %args.api_url,
        log_dir = ?log_config.dir,
        "Starting context7-mcp server"
    );

    let state = Arc::new(
        AppState::with_base_url(&args.api_url, &args.source, ToolLogger::new())
            .map_err(|e| format!("Failed to create state: {}", e))?,
    );

    let router = McpRouter::new()
        .server_info("context7-mcp", env!("CARGO_PKG_VERSION"))
        .instructions(
            "MCP server for the Context7 documentation API.\n\n\
             Available tools:\n\
             - resolve_library_id: Find Context7-compatible library IDs by name\n\
             - get_library_docs: Fetch documentation for a library ID \
               (optional topic, tokens, folders)\n\
             - echo: Echo a message back\n\
             - reverse_echo: Echo a message back reversed\n\n\
             Call resolve_library_id first, then pass the chosen ID to get_library_docs.",
        )
        .tool(tools::echo::build(state.clone()))
        .tool(tools::reverse_echo::build(state.clone()))
        .tool(tools::resolve_library_id::build(state.clone()))
        .tool(tools::get_library_docs::build(state.clone()));

    match args.transport {
        Transport::Stdio => {
            tracing::info!("Serving over stdio");
            StdioTransport::new(router).run().await?;
        }
        Transport::Http => {
            let addr = format!("{}:{}", args.host, args.port);
            tracing::info!(
                %addr,
                request_timeout_secs = args.request_timeout_secs,
                "Serving over HTTP"
            );

            let middleware = ServiceBuilder::new()
                .layer(TimeoutLayer::new(Duration::from_secs(
                    args.request_timeout_secs,
                )))
                .layer(McpTracingLayer::new())
                .into_inner();

            HttpTransport::new(router)
                .disable_origin_validation()
                .layer(middleware)
                .serve(&addr)
                .await?;
        }
    }

    Ok(())
}

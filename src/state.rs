//! Shared application state

use crate::client::{self, Context7Client};
use crate::logging::ToolLogger;

/// Shared state for the MCP server
pub struct AppState {
    /// Context7 API client
    pub client: Context7Client,
    /// Call/result logging for tool handlers
    pub logger: ToolLogger,
    /// Name reported by the echo tool
    pub service_name: String,
}

impl AppState {
    /// Create state against the production Context7 API.
    pub fn new(logger: ToolLogger) -> Result<Self, client::Error> {
        Self::with_base_url(client::DEFAULT_BASE_URL, client::DEFAULT_SOURCE, logger)
    }

    /// Create state against a custom API base URL.
    pub fn with_base_url(
        base_url: &str,
        source: &str,
        logger: ToolLogger,
    ) -> Result<Self, client::Error> {
        let client = Context7Client::with_base_url(&user_agent(), base_url)?.with_source(source);
        Ok(Self {
            client,
            logger,
            service_name: env!("CARGO_PKG_NAME").to_string(),
        })
    }
}

fn user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

//! Echo tool

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use tower_mcp::{
    CallToolResult, Tool, ToolBuilder,
    extract::{Json, State},
};

use crate::state::AppState;

/// Input for the echo tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct EchoInput {
    /// Message to echo back
    message: String,
}

pub fn echo(service_name: &str, message: &str) -> String {
    format!("Hello from {service_name}: {message}")
}

pub fn build(state: Arc<AppState>) -> Tool {
    ToolBuilder::new("echo")
        .description("Echoes the message back to the client.")
        .read_only()
        .idempotent()
        .extractor_handler(
            state,
            |State(state): State<Arc<AppState>>, Json(input): Json<EchoInput>| async move {
                state.logger.call("echo", &input.message);
                let response = echo(&state.service_name, &input.message);
                state.logger.result("echo", &response);
                Ok(CallToolResult::text(response))
            },
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_service_name() {
        assert_eq!(echo("context7-mcp", "hi"), "Hello from context7-mcp: hi");
        assert_eq!(echo("svc", ""), "Hello from svc: ");
    }
}

//! Reverse echo tool

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use tower_mcp::{
    CallToolResult, Tool, ToolBuilder,
    extract::{Json, State},
};

use crate::state::AppState;

/// Input for the reverse echo tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ReverseEchoInput {
    /// Message to reverse
    message: String,
}

pub fn reverse(message: &str) -> String {
    message.chars().rev().collect()
}

pub fn build(state: Arc<AppState>) -> Tool {
    ToolBuilder::new("reverse_echo")
        .description("Echoes in reverse the message sent by the client.")
        .read_only()
        .idempotent()
        .extractor_handler(
            state,
            |State(state): State<Arc<AppState>>, Json(input): Json<ReverseEchoInput>| async move {
                state.logger.call("reverse_echo", &input.message);
                let response = reverse(&input.message);
                state.logger.result("reverse_echo", &response);
                Ok(CallToolResult::text(response))
            },
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverses_by_char() {
        assert_eq!(reverse("hello"), "olleh");
        assert_eq!(reverse(""), "");
        assert_eq!(reverse("añb"), "bña");
    }
}

//! Resolve library ID tool

use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tower_mcp::{
    CallToolResult, Tool, ToolBuilder,
    extract::{Json, State},
};

use crate::client::Context7Client;
use crate::docs::format;
use crate::state::AppState;

const TOOL_NAME: &str = "resolve_library_id";

/// Returned when the search fails or matches nothing.
pub const NO_LIBRARIES_FOUND: &str = "No libraries found matching your query.";

/// Input for resolving a library name
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ResolveLibraryIdInput {
    /// Library name to search for
    #[serde(alias = "libraryName")]
    pub library_name: String,
}

/// Search Context7 and format the matches.
///
/// The name is forwarded as given, blank or not. A failed search and an empty
/// one read the same to the caller.
pub async fn resolve_library_id(client: &Context7Client, library_name: &str) -> String {
    match client.search_libraries(library_name).await {
        Some(response) if !response.is_empty() => format::format_search_results(&response),
        _ => NO_LIBRARIES_FOUND.to_string(),
    }
}

/// Run the tool end to end: log the call and its result.
pub async fn run(state: &AppState, input: &ResolveLibraryIdInput) -> String {
    state.logger.call(TOOL_NAME, input);
    let output = resolve_library_id(&state.client, &input.library_name).await;
    state.logger.result(TOOL_NAME, &output);
    output
}

pub fn build(state: Arc<AppState>) -> Tool {
    ToolBuilder::new(TOOL_NAME)
        .description(
            "Searches for libraries matching the given query and returns \
             Context7-compatible library IDs. Call this before get_library_docs \
             to find the ID for a package name.",
        )
        .read_only()
        .idempotent()
        .extractor_handler(
            state,
            |State(state): State<Arc<AppState>>, Json(input): Json<ResolveLibraryIdInput>| async move {
                Ok(CallToolResult::text(run(&state, &input).await))
            },
        )
        .build()
}

//! Get library documentation tool

use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tower_mcp::{
    CallToolResult, Tool, ToolBuilder,
    extract::{Json, State},
};

use super::ToolFailure;
use crate::client::{Context7Client, DocsQuery, normalize_library_id, split_folders};
use crate::state::AppState;

const TOOL_NAME: &str = "get_library_docs";

/// Token budget used when the caller does not pass one.
pub const DEFAULT_TOKENS: i64 = 10_000;

/// Returned when Context7 has no usable documentation for the ID.
pub const DOCS_NOT_FOUND: &str =
    "Documentation not found for this library. Please verify the library ID is correct.";

/// Input for fetching library documentation
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetLibraryDocsInput {
    /// Context7-compatible library ID from resolve_library_id (e.g. "/vercel/next.js").
    /// May carry a folders filter inline: "/org/repo?folders=src/lib".
    #[serde(alias = "context7CompatibleLibraryID", alias = "libraryId")]
    pub library_id: String,
    /// Optional topic to focus documentation on
    #[serde(default)]
    pub topic: Option<String>,
    /// Maximum number of tokens to retrieve (default: 10000); forwarded as given
    #[serde(default)]
    pub tokens: Option<i64>,
    /// Optional folders filter; an inline "?folders=" in library_id takes precedence
    #[serde(default)]
    pub folders: Option<String>,
}

impl GetLibraryDocsInput {
    pub fn new(library_id: impl Into<String>) -> Self {
        Self {
            library_id: library_id.into(),
            ..Default::default()
        }
    }

    /// Resolve the inline folders marker and defaults into a client query.
    pub fn to_query(&self) -> Result<DocsQuery, ToolFailure> {
        let tokens = self.tokens.unwrap_or(DEFAULT_TOKENS);
        let (library_id, folders) = split_folders(&self.library_id, self.folders.clone());
        normalize_library_id(&library_id)?;

        let mut builder = DocsQuery::builder(&library_id).tokens(tokens);
        if let Some(topic) = self.topic.as_deref() {
            builder = builder.topic(topic);
        }
        if let Some(folders) = folders.as_deref() {
            builder = builder.folders(folders);
        }
        Ok(builder.build())
    }
}

/// Fetch documentation text, or the not-found message when there is none.
pub async fn get_library_docs(
    client: &Context7Client,
    input: &GetLibraryDocsInput,
) -> Result<String, ToolFailure> {
    let query = input.to_query()?;
    Ok(client
        .fetch_documentation(&query)
        .await
        .unwrap_or_else(|| DOCS_NOT_FOUND.to_string()))
}

/// Run the tool end to end: log the call, map any failure to text, log the result.
pub async fn run(state: &AppState, input: &GetLibraryDocsInput) -> String {
    state.logger.call(TOOL_NAME, input);

    let output = match get_library_docs(&state.client, input).await {
        Ok(text) => text,
        Err(e) => {
            state.logger.failure(TOOL_NAME, input, &e);
            format!("Error fetching library documentation: {e}")
        }
    };

    state.logger.result(TOOL_NAME, &output);
    output
}

pub fn build(state: Arc<AppState>) -> Tool {
    ToolBuilder::new(TOOL_NAME)
        .description(
            "Fetches up-to-date documentation for a library using a Context7-compatible \
             library ID. Narrow the output with topic, cap it with tokens, and scope it \
             to folders with \"?folders=path\" appended to the ID.",
        )
        .read_only()
        .idempotent()
        .extractor_handler(
            state,
            |State(state): State<Arc<AppState>>, Json(input): Json<GetLibraryDocsInput>| async move {
                Ok(CallToolResult::text(run(&state, &input).await))
            },
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client;

    #[test]
    fn defaults_to_ten_thousand_tokens() {
        let query = GetLibraryDocsInput::new("/dotnet/runtime").to_query().unwrap();
        assert_eq!(query.query_string(), "type=txt&tokens=10000");
        assert_eq!(query.library_id(), "/dotnet/runtime");
    }

    #[test]
    fn inline_folders_extracted() {
        let query = GetLibraryDocsInput::new("/dotnet/runtime?folders=src/libraries")
            .to_query()
            .unwrap();
        assert_eq!(query.library_id(), "/dotnet/runtime");
        assert_eq!(
            query.query_string(),
            "type=txt&tokens=10000&folders=src%2Flibraries"
        );
    }

    #[test]
    fn inline_folders_override_explicit() {
        let input = GetLibraryDocsInput {
            folders: Some("docs".into()),
            ..GetLibraryDocsInput::new("/a/b?folders=src")
        };
        assert_eq!(
            input.to_query().unwrap().query_string(),
            "type=txt&tokens=10000&folders=src"
        );
    }

    #[test]
    fn explicit_folders_used_without_marker() {
        let input = GetLibraryDocsInput {
            folders: Some("docs".into()),
            topic: Some("routing".into()),
            tokens: Some(2000),
            ..GetLibraryDocsInput::new("a/b")
        };
        assert_eq!(
            input.to_query().unwrap().query_string(),
            "type=txt&tokens=2000&topic=routing&folders=docs"
        );
    }

    #[test]
    fn zero_and_negative_tokens_passed_through() {
        let input = GetLibraryDocsInput {
            tokens: Some(0),
            ..GetLibraryDocsInput::new("/a/b")
        };
        assert_eq!(input.to_query().unwrap().query_string(), "type=txt&tokens=0");

        let input: GetLibraryDocsInput =
            serde_json::from_value(serde_json::json!({"library_id": "/a/b", "tokens": -5}))
                .unwrap();
        assert_eq!(input.to_query().unwrap().query_string(), "type=txt&tokens=-5");
    }

    #[test]
    fn empty_id_rejected() {
        let err = GetLibraryDocsInput::new("/?folders=src").to_query().unwrap_err();
        assert!(matches!(
            err,
            ToolFailure::Client(client::Error::InvalidLibraryId)
        ));
        assert_eq!(err.to_string(), "library ID must not be empty");
    }

    #[test]
    fn accepts_original_argument_names() {
        let input: GetLibraryDocsInput = serde_json::from_value(serde_json::json!({
            "context7CompatibleLibraryID": "/vercel/next.js",
            "topic": "routing",
            "tokens": 5000
        }))
        .unwrap();
        assert_eq!(input.library_id, "/vercel/next.js");
        assert_eq!(input.tokens, Some(5000));
        assert_eq!(input.folders, None);
    }
}

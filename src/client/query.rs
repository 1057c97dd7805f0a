//! Query construction for documentation requests.
//!
//! Context7 expects the query parameters in a fixed order
//! (`type`, `tokens`, `topic`, `folders`), so the query string is assembled by
//! hand instead of through `reqwest`'s form encoder.

use super::error::Error;

/// Marker used by callers to smuggle a folders filter inside a library ID,
/// e.g. `/dotnet/runtime?folders=src/libraries`.
pub const FOLDERS_MARKER: &str = "?folders=";

/// Response format requested from the docs endpoint.
const DOCS_TYPE: &str = "txt";

/// Strip exactly one leading `/` from a library ID.
///
/// Returns `Error::InvalidLibraryId` when nothing is left.
pub fn normalize_library_id(raw: &str) -> Result<&str, Error> {
    let id = raw.strip_prefix('/').unwrap_or(raw);
    if id.trim().is_empty() {
        return Err(Error::InvalidLibraryId);
    }
    Ok(id)
}

/// Split an embedded folders filter out of a library ID.
///
/// The input is split once on [`FOLDERS_MARKER`]. When the marker is present
/// its value wins over `explicit`, even if that value is empty; otherwise
/// `explicit` is passed through.
pub fn split_folders(raw: &str, explicit: Option<String>) -> (String, Option<String>) {
    match raw.split_once(FOLDERS_MARKER) {
        Some((id, folders)) => (id.to_string(), Some(folders.to_string())),
        None => (raw.to_string(), explicit),
    }
}

/// Parameters for a documentation fetch.
#[derive(Debug, Clone, Default)]
pub struct DocsQuery {
    pub(crate) library_id: String,
    pub(crate) tokens: Option<i64>,
    pub(crate) topic: Option<String>,
    pub(crate) folders: Option<String>,
}

impl DocsQuery {
    /// Create a new query builder for the given library ID.
    pub fn builder(library_id: &str) -> DocsQueryBuilder {
        DocsQueryBuilder {
            query: DocsQuery {
                library_id: library_id.to_string(),
                ..Default::default()
            },
        }
    }

    /// The library ID as supplied by the caller.
    pub fn library_id(&self) -> &str {
        &self.library_id
    }

    /// Path below the API base, e.g. `/v1/dotnet/runtime`.
    pub fn path(&self) -> Result<String, Error> {
        let id = normalize_library_id(&self.library_id)?;
        Ok(format!("/v1/{id}"))
    }

    /// Query string without the leading `?`.
    pub fn query_string(&self) -> String {
        let mut params = vec![format!("type={DOCS_TYPE}")];
        if let Some(tokens) = self.tokens {
            params.push(format!("tokens={tokens}"));
        }
        if let Some(topic) = self.topic.as_deref().filter(|t| !t.is_empty()) {
            params.push(format!("topic={}", urlencoding::encode(topic)));
        }
        if let Some(folders) = self.folders.as_deref().filter(|f| !f.is_empty()) {
            params.push(format!("folders={}", urlencoding::encode(folders)));
        }
        params.join("&")
    }

    /// Full request URL against `base_url`.
    pub fn url(&self, base_url: &str) -> Result<String, Error> {
        Ok(format!("{}{}?{}", base_url, self.path()?, self.query_string()))
    }
}

/// Builder for [`DocsQuery`].
pub struct DocsQueryBuilder {
    query: DocsQuery,
}

impl DocsQueryBuilder {
    pub fn tokens(mut self, tokens: i64) -> Self {
        self.query.tokens = Some(tokens);
        self
    }

    pub fn topic(mut self, topic: &str) -> Self {
        self.query.topic = Some(topic.to_string());
        self
    }

    pub fn folders(mut self, folders: &str) -> Self {
        self.query.folders = Some(folders.to_string());
        self
    }

    pub fn build(self) -> DocsQuery {
        self.query
    }
}

//! Context7 API client
//!
//! Async client for the Context7 documentation REST API, built on reqwest.
//! Both public operations swallow every failure (transport, status, empty
//! content, bad JSON) into `None` after logging it; callers only ever see
//! "data" or "no data".

pub mod error;
pub mod query;
pub mod types;
pub(crate) mod wire;


pub use error::Error;
pub use query::{DocsQuery, DocsQueryBuilder, FOLDERS_MARKER, normalize_library_id, split_folders};
pub use types::*;

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://context7.com/api";

/// Header identifying the calling client to Context7.
pub const SOURCE_HEADER: &str = "X-Context7-Source";

/// Source value sent by the server in production.
pub const DEFAULT_SOURCE: &str = "mcp-server";

/// Bodies Context7 returns with a 200 status when it has nothing to serve.
const NO_CONTENT_SENTINELS: [&str; 2] = ["No content available", "No context data available"];

/// Async client for the Context7 REST API.
pub struct Context7Client {
    http: reqwest::Client,
    base_url: String,
    source: String,
}

impl Context7Client {
    /// Create a new client against the production API.
    pub fn new(user_agent: &str) -> Result<Self, Error> {
        Self::with_base_url(user_agent, DEFAULT_BASE_URL)
    }

    /// Create a new client with a custom base URL (for testing).
    pub fn with_base_url(user_agent: &str, base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            source: DEFAULT_SOURCE.to_string(),
        })
    }

    /// Override the `X-Context7-Source` header value.
    ///
    /// Returns `self` for builder-style chaining.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Search for libraries matching `query`.
    ///
    /// Returns `None` on any failure. An empty result list is `Some`.
    pub async fn search_libraries(&self, query: &str) -> Option<SearchResponse> {
        tracing::info!(%query, "Searching libraries");
        match self.try_search_libraries(query).await {
            Ok(resp) => {
                tracing::info!(count = resp.len(), "Search complete");
                Some(resp)
            }
            Err(e) => {
                tracing::error!(%query, error = %e, "Failed to search libraries");
                None
            }
        }
    }

    /// Fetch plain-text documentation.
    ///
    /// Returns `None` on any failure, including an empty body or one of the
    /// "no content" sentinel strings.
    pub async fn fetch_documentation(&self, query: &DocsQuery) -> Option<String> {
        tracing::info!(
            library_id = %query.library_id,
            topic = query.topic.as_deref().unwrap_or("null"),
            folders = query.folders.as_deref().unwrap_or("null"),
            "Fetching documentation"
        );
        match self.try_fetch_documentation(query).await {
            Ok(text) => {
                tracing::info!(
                    library_id = %query.library_id,
                    chars = text.chars().count(),
                    "Fetched documentation"
                );
                Some(text)
            }
            Err(e) if e.is_no_content() => {
                tracing::warn!(library_id = %query.library_id, "No documentation content available");
                None
            }
            Err(e) => {
                tracing::error!(
                    library_id = %query.library_id,
                    error = %e,
                    "Failed to fetch documentation"
                );
                None
            }
        }
    }

    async fn try_search_libraries(&self, query: &str) -> Result<SearchResponse, Error> {
        let url = format!(
            "{}/v1/search?query={}",
            self.base_url,
            urlencoding::encode(query)
        );
        let resp = Self::check_status(self.http.get(&url).send().await?)?;
        let body = resp.text().await?;
        Ok(wire::parse_search_response(&body)?)
    }

    async fn try_fetch_documentation(&self, query: &DocsQuery) -> Result<String, Error> {
        let url = query.url(&self.base_url)?;
        tracing::info!(%url, "Sending request");

        let resp = self
            .http
            .get(&url)
            .header(SOURCE_HEADER, &self.source)
            .send()
            .await?;
        let text = Self::check_status(resp)?.text().await?;

        if is_no_content(&text) {
            return Err(Error::NoContent(query.library_id.clone()));
        }
        Ok(text)
    }

    /// Map non-success HTTP status codes to `Error::Status`.
    fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp)
        } else {
            Err(Error::Status(status.as_u16()))
        }
    }
}

/// Whether a successful body should still be treated as absent.
pub fn is_no_content(body: &str) -> bool {
    body.is_empty() || NO_CONTENT_SENTINELS.contains(&body)
}

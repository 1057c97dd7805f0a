//! Tool definitions for the Context7 bridge
//!
//! Every tool answers with plain text. Failures inside get_library_docs are
//! turned into a descriptive message at the tool boundary instead of a
//! protocol error.

pub mod echo;
pub mod get_library_docs;
pub mod resolve_library_id;
pub mod reverse_echo;

use crate::client;

/// Faults the documentation tool can hit before reaching the API client.
#[derive(Debug, thiserror::Error)]
pub enum ToolFailure {
    #[error(transparent)]
    Client(#[from] client::Error),
}

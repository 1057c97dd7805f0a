//! MCP server for the Context7 documentation API.
//!
//! Exposes library resolution and documentation lookup as MCP tools on top of
//! a small reqwest client for `https://context7.com/api`.

pub mod client;
pub mod docs;
pub mod logging;
pub mod state;
pub mod tools;

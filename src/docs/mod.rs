//! Text rendering for Context7 responses.

pub mod format;

//! Snippets Engine - Orchestration layer
//!
//! Owns the connection pool and the transaction discipline behind the five
//! snippet operations. The store crate supplies statements; this crate
//! decides where transactions begin and end and owns boundary logging.

pub mod commands;
pub mod store;

pub use commands::snippet_command::{apply_snippet_command, SnippetCommand, SnippetCommandResult};
pub use store::{SnippetStore, VisibilityChange};

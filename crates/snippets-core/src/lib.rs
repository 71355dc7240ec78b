//! Snippets Core - domain model, error facility and logging facility
//!
//! This crate provides:
//! - The `Snippet` model and name validation rules
//! - The canonical structured error (`ExError`) and its stable codes
//! - The structured logging facility shared by the engine and the CLI
//!
//! It has no knowledge of the backing store.

pub mod errors;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, Result, SnippetError};
pub use model::{validate_name, Lookup, Snippet, SearchHit};

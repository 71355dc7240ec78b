//! Repository layer for the snippets table
//!
//! Statements only; transaction boundaries belong to the caller.

pub mod sqlite_repo;

pub use sqlite_repo::SnippetRepo;

//! Snippets Store - SQLite persistence for the snippet table
//!
//! Provides:
//! - Pooled SQLite connections with bounded busy/checkout timeouts
//! - Embedded, checksummed schema migrations
//! - Stateless repository statements (insert, update, select, toggle)
//! - Classification of driver errors, including the uniqueness conflict

pub mod config;
pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use config::StoreConfig;
pub use db::{Pool, PooledConnection};
pub use errors::Result;
pub use repo::SnippetRepo;

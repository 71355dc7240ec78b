//! Snippet store service with boundary logging.
//!
//! ## Transaction discipline
//!
//! Mutating operations (`put`, `hide`) run inside one IMMEDIATE transaction
//! acquired at the start of the call. The transaction is committed on success
//! and rolled back on drop for every other exit path. Reads run as a single
//! statement on a pooled connection.
//!
//! ## Logging Ownership
//!
//! This layer owns lifecycle logging for every operation:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Only names, lengths, flags and counts are logged. Snippet content is not.

#![allow(clippy::result_large_err)]

use rusqlite::TransactionBehavior;
use serde::Serialize;
use snippets_core::errors::{ExError, ExErrorKind};
use snippets_core::{log_op_end, log_op_error, log_op_start};
use snippets_core::{validate_name, Lookup, SearchHit, Snippet};
use snippets_store::db::{self, Pool};
use snippets_store::errors::{from_rusqlite, Result};
use snippets_store::migrations::apply_migrations;
use snippets_store::{SnippetRepo, StoreConfig};
use std::path::Path;
use std::time::Instant;

const OP_OPEN: &str = "open";
const OP_PUT: &str = "put";
const OP_GET: &str = "get";
const OP_CATALOG: &str = "catalog";
const OP_SEARCH: &str = "search";
const OP_HIDE: &str = "hide";

/// Result of a visibility toggle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibilityChange {
    pub name: String,
    pub hidden: bool,
}

/// Which branch of the upsert protocol stored the row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UpsertPath {
    Inserted,
    Updated,
}

impl UpsertPath {
    fn as_str(self) -> &'static str {
        match self {
            UpsertPath::Inserted => "insert",
            UpsertPath::Updated => "update",
        }
    }
}

/// Named-snippet store backed by a pooled SQLite database
///
/// Cloning is cheap and clones share the pool, so one store can serve many
/// threads. There is no in-process cache: every call is a round trip.
#[derive(Clone)]
pub struct SnippetStore {
    pool: Pool,
}

impl SnippetStore {
    /// Open (creating if needed) the database at `path` and apply migrations
    pub fn open<P: AsRef<Path>>(path: P, config: &StoreConfig) -> Result<Self> {
        let start = Instant::now();
        let pool = db::open_pool(path, config)
            .and_then(Self::migrate)
            .map_err(|e| {
                log_op_error!(
                    OP_OPEN,
                    &e,
                    duration_ms = start.elapsed().as_millis() as u64
                );
                e
            })?;

        log_op_end!(OP_OPEN, duration_ms = start.elapsed().as_millis() as u64);
        Ok(Self { pool })
    }

    /// Open a private in-memory store (for tests and throwaway sessions)
    pub fn open_in_memory() -> Result<Self> {
        let pool = db::open_in_memory_pool(&StoreConfig::default()).and_then(Self::migrate)?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool; the schema must already be migrated
    pub fn from_pool(pool: Pool) -> Self {
        Self { pool }
    }

    /// The underlying pool
    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    fn migrate(pool: Pool) -> Result<Pool> {
        let mut conn = db::checkout(&pool)?;
        apply_migrations(&mut conn)?;
        drop(conn);
        Ok(pool)
    }

    // ---------------------------------------------------------------------
    // put
    // ---------------------------------------------------------------------

    /// Store `content` under `name`, replacing any existing snippet
    ///
    /// ## Errors
    ///
    /// - `InvalidArgument`: `name` failed validation
    /// - `StoreUnavailable` / `Timeout`: the store could not complete or commit
    pub fn put(&self, name: &str, content: &str, hidden: bool) -> Result<Snippet> {
        log_op_start!(
            OP_PUT,
            name = name,
            content_len = content.len(),
            hidden = hidden
        );
        let start = Instant::now();

        let (snippet, path) = self.put_impl(name, content, hidden).map_err(|e| {
            log_op_error!(
                OP_PUT,
                &e,
                duration_ms = start.elapsed().as_millis() as u64,
                name = name
            );
            e
        })?;

        log_op_end!(
            OP_PUT,
            duration_ms = start.elapsed().as_millis() as u64,
            name = name,
            path = path.as_str()
        );

        Ok(snippet)
    }

    /// Insert first; on a uniqueness conflict, roll the insert back to its
    /// savepoint and update the existing row in the same transaction.
    fn put_impl(&self, name: &str, content: &str, hidden: bool) -> Result<(Snippet, UpsertPath)> {
        validate_name(name)?;
        let snippet = Snippet::new(name, content).with_hidden(hidden);

        let mut conn = db::checkout(&self.pool)?;
        let mut tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(from_rusqlite)?;

        let path = {
            let mut sp = tx.savepoint().map_err(from_rusqlite)?;
            match SnippetRepo::insert(&sp, &snippet) {
                Ok(()) => {
                    sp.commit().map_err(from_rusqlite)?;
                    UpsertPath::Inserted
                }
                Err(e) if e.is_conflict() => {
                    tracing::debug!(name = name, "name exists; falling back to update");
                    sp.rollback().map_err(from_rusqlite)?;
                    UpsertPath::Updated
                }
                Err(e) => return Err(e),
            }
        };

        if path == UpsertPath::Updated {
            let changed = SnippetRepo::update(&tx, &snippet)?;
            if changed != 1 {
                return Err(ExError::new(ExErrorKind::Internal)
                    .with_op(OP_PUT)
                    .with_name(name)
                    .with_message(format!(
                        "Update after conflict changed {} rows, expected 1",
                        changed
                    )));
            }
        }

        tx.commit().map_err(from_rusqlite)?;

        Ok((snippet, path))
    }

    // ---------------------------------------------------------------------
    // get
    // ---------------------------------------------------------------------

    /// Look up a snippet by exact name, hidden or not
    ///
    /// A missing name is `Lookup::NotFound`, not an error.
    pub fn get(&self, name: &str) -> Result<Lookup> {
        log_op_start!(OP_GET, name = name);
        let start = Instant::now();

        let lookup = self.get_impl(name).map_err(|e| {
            log_op_error!(
                OP_GET,
                &e,
                duration_ms = start.elapsed().as_millis() as u64,
                name = name
            );
            e
        })?;

        log_op_end!(
            OP_GET,
            duration_ms = start.elapsed().as_millis() as u64,
            name = name,
            found = lookup.is_found()
        );

        Ok(lookup)
    }

    fn get_impl(&self, name: &str) -> Result<Lookup> {
        validate_name(name)?;
        let conn = db::checkout(&self.pool)?;

        Ok(match SnippetRepo::get(&conn, name)? {
            Some(snippet) => Lookup::Found(snippet),
            None => Lookup::NotFound {
                name: name.to_string(),
            },
        })
    }

    // ---------------------------------------------------------------------
    // catalog
    // ---------------------------------------------------------------------

    /// Names of all visible snippets in ascending lexicographic order
    pub fn catalog(&self) -> Result<Vec<String>> {
        log_op_start!(OP_CATALOG);
        let start = Instant::now();

        let names = db::checkout(&self.pool)
            .and_then(|conn| SnippetRepo::list_visible_names(&conn))
            .map_err(|e| {
                log_op_error!(
                    OP_CATALOG,
                    &e,
                    duration_ms = start.elapsed().as_millis() as u64
                );
                e
            })?;

        log_op_end!(
            OP_CATALOG,
            duration_ms = start.elapsed().as_millis() as u64,
            rows = names.len()
        );

        Ok(names)
    }

    // ---------------------------------------------------------------------
    // search
    // ---------------------------------------------------------------------

    /// Visible snippets whose content contains `target`
    ///
    /// Case-sensitive substring match; an empty target matches every visible
    /// snippet. Results follow storage order and are not ranked.
    pub fn search(&self, target: &str) -> Result<Vec<SearchHit>> {
        log_op_start!(OP_SEARCH, target_len = target.len());
        let start = Instant::now();

        let hits = db::checkout(&self.pool)
            .and_then(|conn| SnippetRepo::search_visible(&conn, target))
            .map_err(|e| {
                log_op_error!(
                    OP_SEARCH,
                    &e,
                    duration_ms = start.elapsed().as_millis() as u64
                );
                e
            })?;

        log_op_end!(
            OP_SEARCH,
            duration_ms = start.elapsed().as_millis() as u64,
            rows = hits.len()
        );

        Ok(hits)
    }

    // ---------------------------------------------------------------------
    // hide
    // ---------------------------------------------------------------------

    /// Set the hidden flag for `name`
    ///
    /// An unknown name is a no-op that still reports `(name, hidden)`.
    pub fn hide(&self, name: &str, hidden: bool) -> Result<VisibilityChange> {
        log_op_start!(OP_HIDE, name = name, hidden = hidden);
        let start = Instant::now();

        let rows_affected = self.hide_impl(name, hidden).map_err(|e| {
            log_op_error!(
                OP_HIDE,
                &e,
                duration_ms = start.elapsed().as_millis() as u64,
                name = name
            );
            e
        })?;

        if rows_affected == 0 {
            tracing::debug!(name = name, "hide matched no snippet");
        }

        log_op_end!(
            OP_HIDE,
            duration_ms = start.elapsed().as_millis() as u64,
            name = name,
            rows_affected = rows_affected
        );

        Ok(VisibilityChange {
            name: name.to_string(),
            hidden,
        })
    }

    fn hide_impl(&self, name: &str, hidden: bool) -> Result<usize> {
        validate_name(name)?;

        let mut conn = db::checkout(&self.pool)?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(from_rusqlite)?;

        let rows_affected = SnippetRepo::set_hidden(&tx, name, hidden)?;
        tx.commit().map_err(from_rusqlite)?;

        Ok(rows_affected)
    }
}

impl std::fmt::Debug for SnippetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.pool.state();
        f.debug_struct("SnippetStore")
            .field("connections", &state.connections)
            .field("idle_connections", &state.idle_connections)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_reports_insert_then_update_path() {
        let store = SnippetStore::open_in_memory().unwrap();

        let (_, first) = store.put_impl("a", "x", false).unwrap();
        let (_, second) = store.put_impl("a", "y", false).unwrap();

        assert_eq!(first, UpsertPath::Inserted);
        assert_eq!(second, UpsertPath::Updated);
    }

    #[test]
    fn test_invalid_name_rejected_before_checkout() {
        let store = SnippetStore::open_in_memory().unwrap();
        // Hold the only in-memory connection: validation must not need it
        let _held = db::checkout(store.pool()).unwrap();

        let err = store.put("", "x", false).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidArgument);
        let err = store.get("   ").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidArgument);
        let err = store.hide("a\nb", true).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidArgument);
    }

    #[test]
    fn test_debug_shows_pool_state_only() {
        let store = SnippetStore::open_in_memory().unwrap();
        store.put("k", "classified", false).unwrap();
        let dbg = format!("{:?}", store);
        assert!(dbg.contains("SnippetStore"));
        assert!(!dbg.contains("classified"));
    }
}

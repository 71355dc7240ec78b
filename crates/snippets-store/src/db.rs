//! Database connection management
//!
//! Provides the pooled SQLite handle that the engine owns. Every connection
//! handed out by the pool has already been configured.

#![allow(clippy::result_large_err)]

use crate::config::StoreConfig;
use crate::errors::{from_pool_build, from_pool_checkout, io_error, Result};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// Pool of configured SQLite connections
pub type Pool = r2d2::Pool<SqliteConnectionManager>;

/// A connection checked out of the pool; returned on drop
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Open a pool over the SQLite database file at `path`
///
/// The parent directory is created if missing.
pub fn open_pool<P: AsRef<Path>>(path: P, config: &StoreConfig) -> Result<Pool> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_error("create_db_dir", e))?;
    }

    let busy_timeout = config.busy_timeout;
    let manager = SqliteConnectionManager::file(path).with_init(move |conn| {
        configure(conn, busy_timeout)?;
        enable_wal(conn)
    });

    r2d2::Pool::builder()
        .max_size(config.max_connections.max(1))
        .connection_timeout(config.connection_timeout)
        .build(manager)
        .map_err(from_pool_build)
}

/// Open a pool over a private in-memory database (for testing)
///
/// Each in-memory connection is its own database, so the pool holds exactly
/// one connection and never recycles it.
pub fn open_in_memory_pool(config: &StoreConfig) -> Result<Pool> {
    let busy_timeout = config.busy_timeout;
    let manager =
        SqliteConnectionManager::memory().with_init(move |conn| configure(conn, busy_timeout));

    r2d2::Pool::builder()
        .max_size(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connection_timeout(config.connection_timeout)
        .build(manager)
        .map_err(from_pool_build)
}

/// Check out a connection, failing with `Timeout` past the pool's bound
pub fn checkout(pool: &Pool) -> Result<PooledConnection> {
    pool.get().map_err(from_pool_checkout)
}

/// Configure a connection with the settings every store connection needs
pub fn configure(conn: &Connection, busy_timeout: Duration) -> rusqlite::Result<()> {
    conn.busy_timeout(busy_timeout)?;
    conn.pragma_update(None, "foreign_keys", "ON")?;
    Ok(())
}

/// Switch a file database to WAL so readers do not block the writer
fn enable_wal(conn: &Connection) -> rusqlite::Result<()> {
    let mode: String =
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
    tracing::debug!(journal_mode = %mode, "configured sqlite connection");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_pool_reuses_single_database() {
        let pool = open_in_memory_pool(&StoreConfig::default()).unwrap();
        {
            let conn = checkout(&pool).unwrap();
            conn.execute_batch("CREATE TABLE marker (x INTEGER)").unwrap();
        }
        let conn = checkout(&pool).unwrap();
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE name = 'marker'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_in_memory_checkout_times_out_when_held() {
        let config = StoreConfig::default().with_timeout(Duration::from_millis(50));
        let pool = open_in_memory_pool(&config).unwrap();
        let _held = checkout(&pool).unwrap();

        let err = checkout(&pool).unwrap_err();
        assert_eq!(err.code(), "ERR_TIMEOUT");
    }

    #[test]
    fn test_file_pool_creates_parent_dir_and_uses_wal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.db");
        let pool = open_pool(&path, &StoreConfig::default()).unwrap();
        assert!(path.exists());

        let conn = checkout(&pool).unwrap();
        let mode: String = conn
            .query_row("PRAGMA journal_mode", [], |row| row.get(0))
            .unwrap();
        assert_eq!(mode.to_lowercase(), "wal");
    }
}

//! SQLite repository implementation
//!
//! Every statement binds caller-supplied values positionally. Functions take
//! `&Connection`, so they run equally on a plain connection, a transaction
//! or a savepoint (all deref to `Connection`).

#![allow(clippy::result_large_err)]

use crate::errors::{conflict, from_rusqlite, is_unique_violation, Result};
use rusqlite::{Connection, OptionalExtension};
use snippets_core::{SearchHit, Snippet};

/// SQLite repository for snippets
pub struct SnippetRepo;

impl SnippetRepo {
    /// Insert a new snippet row
    ///
    /// A rejected insert because `name` already exists is reported as a
    /// `Conflict` error; every other failure is a store error.
    pub fn insert(conn: &Connection, snippet: &Snippet) -> Result<()> {
        let outcome = conn.execute(
            "INSERT INTO snippets (name, content, hidden) VALUES (?1, ?2, ?3)",
            rusqlite::params![snippet.name, snippet.content, snippet.hidden],
        );

        match outcome {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(conflict(&snippet.name)),
            Err(e) => Err(from_rusqlite(e)),
        }
    }

    /// Replace content and visibility of the row named `snippet.name`
    ///
    /// Returns the number of rows changed (0 or 1).
    pub fn update(conn: &Connection, snippet: &Snippet) -> Result<usize> {
        conn.execute(
            "UPDATE snippets SET content = ?1, hidden = ?2 WHERE name = ?3",
            rusqlite::params![snippet.content, snippet.hidden, snippet.name],
        )
        .map_err(from_rusqlite)
    }

    /// Set the hidden flag; returns the number of rows changed (0 or 1)
    pub fn set_hidden(conn: &Connection, name: &str, hidden: bool) -> Result<usize> {
        conn.execute(
            "UPDATE snippets SET hidden = ?1 WHERE name = ?2",
            rusqlite::params![hidden, name],
        )
        .map_err(from_rusqlite)
    }

    /// Get a snippet by exact name, regardless of visibility
    pub fn get(conn: &Connection, name: &str) -> Result<Option<Snippet>> {
        let mut stmt = conn
            .prepare_cached("SELECT name, content, hidden FROM snippets WHERE name = ?1")
            .map_err(from_rusqlite)?;

        stmt.query_row([name], |row| {
            Ok(Snippet {
                name: row.get(0)?,
                content: row.get(1)?,
                hidden: row.get(2)?,
            })
        })
        .optional()
        .map_err(from_rusqlite)
    }

    /// Names of all visible snippets, ascending bytewise
    pub fn list_visible_names(conn: &Connection) -> Result<Vec<String>> {
        let mut stmt = conn
            .prepare_cached("SELECT name FROM snippets WHERE hidden = 0 ORDER BY name ASC")
            .map_err(from_rusqlite)?;

        let names = stmt
            .query_map([], |row| row.get(0))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<String>, _>>()
            .map_err(from_rusqlite)?;

        Ok(names)
    }

    /// Visible snippets whose content contains `target` (case-sensitive)
    ///
    /// `instr` treats an empty needle as found at position 1, so an empty
    /// target matches every visible snippet. Rows come back in rowid order,
    /// which updates never change.
    pub fn search_visible(conn: &Connection, target: &str) -> Result<Vec<SearchHit>> {
        let mut stmt = conn
            .prepare_cached(
                "SELECT name, content FROM snippets
                 WHERE hidden = 0 AND instr(content, ?1) > 0
                 ORDER BY rowid ASC",
            )
            .map_err(from_rusqlite)?;

        let hits = stmt
            .query_map([target], |row| {
                Ok(SearchHit {
                    name: row.get(0)?,
                    content: row.get(1)?,
                })
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(hits)
    }

    /// Number of rows stored under `name` (0 or 1 while the key is unique)
    pub fn count_by_name(conn: &Connection, name: &str) -> Result<i64> {
        conn.query_row(
            "SELECT COUNT(*) FROM snippets WHERE name = ?1",
            [name],
            |row| row.get(0),
        )
        .map_err(from_rusqlite)
    }
}

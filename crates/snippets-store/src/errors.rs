//! Error handling for snippets-store
//!
//! Wraps snippets-core ExError with store-specific helpers

use rusqlite::{ffi, ErrorCode};
use snippets_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Migration)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::Migration)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create the internal uniqueness-conflict signal for a rejected insert
pub fn conflict(name: &str) -> ExError {
    ExError::new(ExErrorKind::Conflict)
        .with_op("insert")
        .with_name(name)
        .with_message("Snippet name already exists")
}

/// True only for a PRIMARY KEY / UNIQUE violation
///
/// CHECK, NOT NULL and other constraint failures share the primary
/// `ConstraintViolation` code and must not be mistaken for a name clash.
pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(e, _) => {
            e.code == ErrorCode::ConstraintViolation
                && matches!(
                    e.extended_code,
                    ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE
                )
        }
        _ => false,
    }
}

/// Create a database error from rusqlite::Error
///
/// A busy or locked database past the busy timeout is reported as `Timeout`.
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    let kind = match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if matches!(e.code, ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked) =>
        {
            ExErrorKind::Timeout
        }
        _ => ExErrorKind::StoreUnavailable,
    };

    ExError::new(kind)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an error for a pool checkout that did not complete in time
pub fn from_pool_checkout(err: r2d2::Error) -> ExError {
    ExError::new(ExErrorKind::Timeout)
        .with_op("pool_checkout")
        .with_message(err.to_string())
}

/// Create an error for a pool that could not be built
pub fn from_pool_build(err: r2d2::Error) -> ExError {
    ExError::new(ExErrorKind::StoreUnavailable)
        .with_op("pool_build")
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

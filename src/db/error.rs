use rusqlite::ffi;
use thiserror::Error;

/// Typed outcomes of the data-access layer.
///
/// Callers need to tell user-correctable failures (bad input, duplicate
/// names, dangling weekday references) apart from storage faults, so the
/// first four variants are recoverable and the last one is not.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("invalid time '{0}', expected HH:MM")]
    InvalidTime(String),
    #[error("'{0}' already exists")]
    Duplicate(String),
    #[error("no weekday with id {0}")]
    UnknownWeekday(i32),
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

impl DbError {
    /// True when the caller can fix the input and retry.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, DbError::Sqlite(_))
    }
}

pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(err, rusqlite::Error::SqliteFailure(e, _) if e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE)
}

pub(crate) fn is_foreign_key_violation(err: &rusqlite::Error) -> bool {
    matches!(err, rusqlite::Error::SqliteFailure(e, _) if e.extended_code == ffi::SQLITE_CONSTRAINT_FOREIGNKEY)
}

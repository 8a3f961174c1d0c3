//! Repository layer abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for actors and films.
//! - Isolate SQL details from service/business orchestration.
//!
//! # Invariants
//! - Repository writes must enforce model `validate()` before persistence.
//! - Every storage failure is wrapped with the originating operation's name;
//!   constraint violations surface as [`RepoError::Constraint`], everything
//!   else as [`RepoError::Db`].
//! - Repositories only accept connections opened through `db::open_db*`
//!   (migrated, `foreign_keys=ON`).

use crate::db::DbError;
use crate::model::ValidationError;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod actor_repo;
pub mod film_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error taxonomy shared by actor/film persistence, search and
/// the filmography aggregation.
#[derive(Debug)]
pub enum RepoError {
    /// Field-level invariant failure caught before any SQL was issued.
    Validation(ValidationError),
    /// Natural-key lookup miss, mutation of a missing row, or an empty
    /// search outcome.
    NotFound { what: &'static str },
    /// Storage constraint violation (natural-key or association uniqueness,
    /// foreign-key restriction) on a write.
    Constraint { op: &'static str, message: String },
    /// Sort column outside the `list_films` whitelist; rejected before any
    /// query reaches the ordering clause.
    InvalidSortColumn(String),
    /// Any other persistence failure, tagged with the failing operation.
    Db { op: &'static str, source: DbError },
    /// Persisted state that no longer satisfies the model invariants.
    InvalidData(String),
    /// Connection carries no applied migrations.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Connection is versioned but lacks a required table.
    MissingRequiredTable(&'static str),
    /// Connection is versioned but a required column is absent.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound { what } => write!(f, "no {what} found"),
            Self::Constraint { op, message } => {
                write!(f, "{op}: constraint violation: {message}")
            }
            Self::InvalidSortColumn(column) => write!(f, "invalid sort column `{column}`"),
            Self::Db { op, source } => write!(f, "{op}: {source}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it via db::open_db"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Maps a rusqlite failure to the repository taxonomy, keeping the
/// operation name on the error.
pub(crate) fn classify_sqlite(op: &'static str, err: rusqlite::Error) -> RepoError {
    match err {
        rusqlite::Error::SqliteFailure(failure, message)
            if failure.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            RepoError::Constraint {
                op,
                message: message.unwrap_or_else(|| failure.to_string()),
            }
        }
        other => RepoError::Db {
            op,
            source: DbError::Sqlite(other),
        },
    }
}

/// Curried form of [`classify_sqlite`] for `map_err` call sites.
pub(crate) fn db_err(op: &'static str) -> impl FnOnce(rusqlite::Error) -> RepoError {
    move |err| classify_sqlite(op, err)
}

/// Verifies the connection was opened through `db::open_db*` and carries
/// the tables/columns a repository relies on.
pub(crate) fn ensure_connection_ready(
    conn: &Connection,
    requirements: &[(&'static str, &[&'static str])],
) -> RepoResult<()> {
    const OP: &str = "repo.ensure_connection_ready";

    let expected = crate::db::migrations::latest_version();
    let actual: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .map_err(db_err(OP))?;
    if actual != expected {
        return Err(RepoError::UninitializedConnection {
            expected_version: expected,
            actual_version: actual,
        });
    }

    for &(table, columns) in requirements {
        if !table_exists(conn, table)? {
            return Err(RepoError::MissingRequiredTable(table));
        }
        for &column in columns {
            if !table_has_column(conn, table, column)? {
                return Err(RepoError::MissingRequiredColumn { table, column });
            }
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table],
            |row| row.get(0),
        )
        .map_err(db_err("repo.table_exists"))?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({table});"))
        .map_err(db_err("repo.table_has_column"))?;
    let mut rows = stmt.query([]).map_err(db_err("repo.table_has_column"))?;
    while let Some(row) = rows.next().map_err(db_err("repo.table_has_column"))? {
        let current: String = row.get(1).map_err(db_err("repo.table_has_column"))?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}

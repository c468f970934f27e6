//! Snapshot repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable load/save APIs over the durable state slot.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Load paths must reject malformed persisted payloads instead of
//!   masking them.
//! - `try_new` refuses connections whose schema was not migrated.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::state::AppState;
use crate::repo::codec::{decode_app_state, encode_app_state, SnapshotShapeError};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Name of the slot holding the application snapshot.
pub const STATE_SLOT: &str = "appState";

const SLOT_TABLE: &str = "state_slots";
const SLOT_COLUMNS: &[&str] = &["slot", "payload", "updated_at"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for snapshot persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    MalformedSnapshot(SnapshotShapeError),
    Encode(serde_json::Error),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::MalformedSnapshot(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode snapshot: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; run migrations first"
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
            Self::Db(err) => Some(err),
            Self::MalformedSnapshot(err) => Some(err),
            Self::Encode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<SnapshotShapeError> for RepoError {
    fn from(value: SnapshotShapeError) -> Self {
        Self::MalformedSnapshot(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Repository interface for the durable snapshot slot.
///
/// Only the store may write through this interface; all writes preserve
/// the persist-before-notify ordering guaranteed by the store.
pub trait StateRepository {
    /// Reads the slot. Absent slot yields `Ok(None)`; a present but
    /// malformed payload yields `Err(RepoError::MalformedSnapshot)`.
    fn load(&self) -> RepoResult<Option<AppState>>;
    /// Upserts the JSON-serialized snapshot into the slot.
    fn save(&self, state: &AppState) -> RepoResult<()>;
}

/// SQLite-backed snapshot repository.
pub struct SqliteStateRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStateRepository<'conn> {
    /// Wraps a connection after checking that its schema is usable.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations never ran.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the slot
    ///   table does not match the shape this binary expects.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected_version = latest_version();
        let actual_version =
            conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
        if actual_version == 0 {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let table_present = conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1;",
                params![SLOT_TABLE],
                |row| row.get::<_, String>(0),
            )
            .optional()?
            .is_some();
        if !table_present {
            return Err(RepoError::MissingRequiredTable(SLOT_TABLE));
        }

        let mut stmt = conn.prepare(&format!("PRAGMA table_info({SLOT_TABLE});"))?;
        let present: Vec<String> = stmt
            .query_map([], |row| row.get::<_, String>("name"))?
            .collect::<Result<_, _>>()?;
        for column in SLOT_COLUMNS {
            if !present.iter().any(|name| name == column) {
                return Err(RepoError::MissingRequiredColumn {
                    table: SLOT_TABLE,
                    column,
                });
            }
        }

        Ok(Self { conn })
    }
}

impl StateRepository for SqliteStateRepository<'_> {
    fn load(&self) -> RepoResult<Option<AppState>> {
        let payload = self
            .conn
            .query_row(
                "SELECT payload FROM state_slots WHERE slot = ?1;",
                params![STATE_SLOT],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        match payload {
            Some(payload) => Ok(Some(decode_app_state(&payload)?)),
            None => Ok(None),
        }
    }

    fn save(&self, state: &AppState) -> RepoResult<()> {
        let payload = encode_app_state(state)?;
        self.conn.execute(
            "INSERT INTO state_slots (slot, payload, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(slot) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![STATE_SLOT, payload],
        )?;
        Ok(())
    }
}

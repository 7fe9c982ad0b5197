//! SQLite backend for geopin slot storage.
//!
//! Each durable slot is one row in the `slots` table. A slot is always
//! replaced by a single statement, so readers see either the previous or
//! the new contents and never a partial write.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use crate::storage::SlotStorage;

/// Error types for SQLite operations.
#[derive(Debug)]
pub enum Error {
    Sqlite(String),
    InvalidSlotName(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Sqlite(msg) => write!(f, "Database error: {}", msg),
            Error::InvalidSlotName(name) => write!(f, "Invalid slot name: {:?}", name),
        }
    }
}

impl std::error::Error for Error {}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Sqlite(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// SQLite database holding named slots.
pub struct Database {
    conn: Connection,
}

/// Initialize database schema.
fn create_schema(conn: &mut Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS slots (
            name TEXT PRIMARY KEY,
            contents TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn validate_slot_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidSlotName(name.to_string()));
    }
    Ok(())
}

impl Database {
    /// Open or create a SQLite database at the given path.
    ///
    /// Initializes the schema if the database is new.
    ///
    /// # Errors
    ///
    /// Returns error if the database cannot be opened or schema initialization fails.
    pub fn open(path: &Path) -> Result<Self> {
        let mut conn = Connection::open(path)?;
        create_schema(&mut conn)?;
        Ok(Self { conn })
    }

    /// Read a slot's raw contents. Missing slots yield `None`.
    pub fn read(&self, name: &str) -> Result<Option<String>> {
        validate_slot_name(name)?;
        let contents = self
            .conn
            .query_row(
                "SELECT contents FROM slots WHERE name = ?1",
                [name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(contents)
    }

    /// Overwrite a slot with new contents, creating it if needed.
    pub fn write(&self, name: &str, contents: &str) -> Result<()> {
        validate_slot_name(name)?;
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            r#"
            INSERT INTO slots (name, contents, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(name) DO UPDATE SET
                contents = excluded.contents,
                updated_at = excluded.updated_at
            "#,
            params![name, contents, &now],
        )?;
        Ok(())
    }
}

impl SlotStorage for Database {
    fn read_slot(&self, name: &str) -> std::result::Result<Option<String>, crate::errors::Error> {
        Ok(self.read(name)?)
    }

    fn write_slot(&self, name: &str, contents: &str) -> std::result::Result<(), crate::errors::Error> {
        Ok(self.write(name, contents)?)
    }
}

//! SQLite-backed read-only reference data (MPA ratings and genres).
//!
//! # Responsibility
//! - Serve `mpa` and `genres` rows seeded by migrations.
//! - Keep row decoding in one typed function per table shape.
//!
//! # Invariants
//! - No write path is exposed.
//! - List queries are ordered by ascending id.
//! - A zero-row lookup is `Ok(None)`.

use crate::db::migrations::{current_user_version, latest_version};
use crate::model::reference::{Genre, Mpa, ReferenceId};
use crate::storage::{GenreStorage, MpaStorage, StoreError, StoreResult};
use rusqlite::{Connection, Row};

const REQUIRED_TABLES: &[&str] = &["mpa", "genres"];

/// Table-backed reference record with `(id, name)` columns.
trait ReferenceRow: Sized {
    const TABLE: &'static str;

    fn from_columns(id: ReferenceId, name: String) -> Self;
}

impl ReferenceRow for Mpa {
    const TABLE: &'static str = "mpa";

    fn from_columns(id: ReferenceId, name: String) -> Self {
        Self { id, name }
    }
}

impl ReferenceRow for Genre {
    const TABLE: &'static str = "genres";

    fn from_columns(id: ReferenceId, name: String) -> Self {
        Self { id, name }
    }
}

/// Reference store over a migrated SQLite connection.
pub struct SqliteReferenceStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteReferenceStorage<'conn> {
    /// Constructs a store from a migrated connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    /// - `MissingRequiredTable` when a reference table is absent.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }

    fn select_all<T: ReferenceRow>(&self) -> StoreResult<Vec<T>> {
        let mut stmt = self
            .conn
            .prepare_cached(&format!("SELECT id, name FROM {} ORDER BY id ASC;", T::TABLE))?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();

        while let Some(row) = rows.next()? {
            items.push(decode_reference_row(row)?);
        }

        Ok(items)
    }

    fn select_by_id<T: ReferenceRow>(&self, id: ReferenceId) -> StoreResult<Option<T>> {
        let mut stmt = self
            .conn
            .prepare_cached(&format!("SELECT id, name FROM {} WHERE id = ?1;", T::TABLE))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(decode_reference_row(row)?));
        }

        Ok(None)
    }
}

impl MpaStorage for SqliteReferenceStorage<'_> {
    fn find_all_mpa(&self) -> StoreResult<Vec<Mpa>> {
        self.select_all()
    }

    fn find_mpa_by_id(&self, id: ReferenceId) -> StoreResult<Option<Mpa>> {
        self.select_by_id(id)
    }
}

impl GenreStorage for SqliteReferenceStorage<'_> {
    fn find_all_genres(&self) -> StoreResult<Vec<Genre>> {
        self.select_all()
    }

    fn find_genre_by_id(&self, id: ReferenceId) -> StoreResult<Option<Genre>> {
        self.select_by_id(id)
    }
}

fn decode_reference_row<T: ReferenceRow>(row: &Row<'_>) -> StoreResult<T> {
    let raw_id: i64 = row.get("id")?;
    let id = ReferenceId::try_from(raw_id).map_err(|_| {
        StoreError::InvalidData(format!("invalid id value `{raw_id}` in {}.id", T::TABLE))
    })?;
    let name: String = row.get("name")?;
    Ok(T::from_columns(id, name))
}

fn ensure_connection_ready(conn: &Connection) -> StoreResult<()> {
    let expected_version = latest_version();
    let actual_version = current_user_version(conn)?;
    if actual_version < expected_version {
        return Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    for table in REQUIRED_TABLES {
        let exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [*table],
            |row| row.get(0),
        )?;
        if exists == 0 {
            return Err(StoreError::MissingRequiredTable(*table));
        }
    }

    Ok(())
}

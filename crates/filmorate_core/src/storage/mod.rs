//! Storage contracts and implementations.
//!
//! # Responsibility
//! - Define per-entity storage traits used by services and the HTTP layer.
//! - Report absence, duplicates, validation and medium failures as
//!   distinct error kinds.
//!
//! # Invariants
//! - Write paths run model validation before any mutation.
//! - `find_*_by_id` reports a miss as `Ok(None)`, never as an error.

use crate::db::DbError;
use crate::model::film::{Film, FilmId};
use crate::model::reference::{Genre, Mpa, ReferenceId};
use crate::model::user::{User, UserId};
use crate::model::validation::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod film_storage;
pub mod memory;
pub mod reference_storage;
pub mod user_storage;

pub type StoreResult<T> = Result<T, StoreError>;

/// Entity family named in storage errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Film,
    Mpa,
    Genre,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Film => "film",
            Self::Mpa => "mpa",
            Self::Genre => "genre",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage error shared by in-memory and SQLite stores.
#[derive(Debug)]
pub enum StoreError {
    NotFound {
        kind: EntityKind,
        id: u64,
    },
    AlreadyExists {
        kind: EntityKind,
        id: u64,
    },
    LikeNotFound {
        film_id: FilmId,
        user_id: UserId,
    },
    Validation(ValidationError),
    Storage(DbError),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl StoreError {
    pub fn not_found(kind: EntityKind, id: impl Into<u64>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// HTTP status the web layer should answer with for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::NotFound { .. } | Self::LikeNotFound { .. } => 404,
            Self::AlreadyExists { .. } | Self::Validation(_) => 400,
            Self::Storage(_)
            | Self::InvalidData(_)
            | Self::UninitializedConnection { .. }
            | Self::MissingRequiredTable(_) => 500,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "no {kind} with id {id}"),
            Self::AlreadyExists { kind, id } => write!(f, "{kind} with id {id} already exists"),
            Self::LikeNotFound { film_id, user_id } => {
                write!(f, "film {film_id} has no like from user {user_id}")
            }
            Self::Validation(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection is not migrated: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Storage(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Storage(DbError::Sqlite(value))
    }
}

/// User persistence plus friendship links.
pub trait UserStorage {
    fn find_all_users(&self) -> StoreResult<Vec<User>>;
    fn find_user_by_id(&self, id: UserId) -> StoreResult<Option<User>>;
    fn create_user(&self, user: User) -> StoreResult<User>;
    fn update_user(&self, user: User) -> StoreResult<User>;
    fn add_friend(&self, user_id: UserId, friend_id: UserId) -> StoreResult<()>;
    fn remove_friend(&self, user_id: UserId, friend_id: UserId) -> StoreResult<()>;
    fn find_friends(&self, user_id: UserId) -> StoreResult<Vec<User>>;
    fn find_common_friends(&self, user_id: UserId, other_id: UserId) -> StoreResult<Vec<User>>;
}

/// Film persistence plus like links.
pub trait FilmStorage {
    fn find_all_films(&self) -> StoreResult<Vec<Film>>;
    fn find_film_by_id(&self, id: FilmId) -> StoreResult<Option<Film>>;
    fn create_film(&self, film: Film) -> StoreResult<Film>;
    fn update_film(&self, film: Film) -> StoreResult<Film>;
    fn add_like(&self, film_id: FilmId, user_id: UserId) -> StoreResult<()>;
    fn remove_like(&self, film_id: FilmId, user_id: UserId) -> StoreResult<()>;
    /// Films with the most likes first, ties broken by ascending id.
    fn find_popular(&self, count: usize) -> StoreResult<Vec<Film>>;
}

/// Read-only MPA rating lookups.
pub trait MpaStorage {
    fn find_all_mpa(&self) -> StoreResult<Vec<Mpa>>;
    fn find_mpa_by_id(&self, id: ReferenceId) -> StoreResult<Option<Mpa>>;
}

/// Read-only genre lookups.
pub trait GenreStorage {
    fn find_all_genres(&self) -> StoreResult<Vec<Genre>>;
    fn find_genre_by_id(&self, id: ReferenceId) -> StoreResult<Option<Genre>>;
}

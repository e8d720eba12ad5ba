//! Core storage and domain logic for Filmorate.
//! This crate owns entity identity, validation and reference data access.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod storage;

pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::film::{Film, FilmId};
pub use model::reference::{Genre, Mpa, ReferenceId};
pub use model::user::{User, UserId};
pub use model::validation::ValidationError;
pub use service::film_service::FilmService;
pub use service::user_service::UserService;
pub use storage::film_storage::InMemoryFilmStorage;
pub use storage::reference_storage::SqliteReferenceStorage;
pub use storage::user_storage::InMemoryUserStorage;
pub use storage::{
    EntityKind, FilmStorage, GenreStorage, MpaStorage, StoreError, StoreResult, UserStorage,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

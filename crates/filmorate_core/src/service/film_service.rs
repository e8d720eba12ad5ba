//! Film use-case service.
//!
//! # Responsibility
//! - Resolve MPA/genre references before films are stored.
//! - Check user existence for like operations.
//!
//! # Invariants
//! - Stored films carry reference names from the reference store, not
//!   caller-provided names.
//! - Stored genres are unique and ordered by id.

use crate::model::film::{Film, FilmId};
use crate::model::reference::{Genre, Mpa, ReferenceId};
use crate::model::user::UserId;
use crate::storage::{
    EntityKind, FilmStorage, GenreStorage, MpaStorage, StoreError, StoreResult, UserStorage,
};
use std::collections::BTreeSet;

/// Number of films returned by `popular` when the caller gives no count.
pub const DEFAULT_POPULAR_COUNT: usize = 10;

/// Use-case wrapper for catalogue, likes and reference lookups.
pub struct FilmService<'a, F, U, R>
where
    F: FilmStorage,
    U: UserStorage,
    R: MpaStorage + GenreStorage,
{
    films: &'a F,
    users: &'a U,
    reference: &'a R,
}

impl<'a, F, U, R> FilmService<'a, F, U, R>
where
    F: FilmStorage,
    U: UserStorage,
    R: MpaStorage + GenreStorage,
{
    pub fn new(films: &'a F, users: &'a U, reference: &'a R) -> Self {
        Self {
            films,
            users,
            reference,
        }
    }

    pub fn find_all(&self) -> StoreResult<Vec<Film>> {
        self.films.find_all_films()
    }

    /// Gets one film, reporting a miss as `NotFound`.
    pub fn get(&self, id: FilmId) -> StoreResult<Film> {
        self.films
            .find_film_by_id(id)?
            .ok_or_else(|| StoreError::not_found(EntityKind::Film, id))
    }

    /// Validates, resolves references and stores a new film.
    pub fn create(&self, film: Film) -> StoreResult<Film> {
        film.validate()?;
        let film = self.resolve_references(film)?;
        self.films.create_film(film)
    }

    /// Validates, resolves references and replaces an existing film.
    pub fn update(&self, film: Film) -> StoreResult<Film> {
        film.validate()?;
        let film = self.resolve_references(film)?;
        self.films.update_film(film)
    }

    pub fn add_like(&self, film_id: FilmId, user_id: UserId) -> StoreResult<()> {
        self.require_user(user_id)?;
        self.films.add_like(film_id, user_id)
    }

    pub fn remove_like(&self, film_id: FilmId, user_id: UserId) -> StoreResult<()> {
        self.require_user(user_id)?;
        self.films.remove_like(film_id, user_id)
    }

    /// Most-liked films; `None` means [`DEFAULT_POPULAR_COUNT`].
    pub fn popular(&self, count: Option<usize>) -> StoreResult<Vec<Film>> {
        self.films
            .find_popular(count.unwrap_or(DEFAULT_POPULAR_COUNT))
    }

    pub fn all_mpa(&self) -> StoreResult<Vec<Mpa>> {
        self.reference.find_all_mpa()
    }

    pub fn mpa(&self, id: ReferenceId) -> StoreResult<Mpa> {
        self.reference
            .find_mpa_by_id(id)?
            .ok_or_else(|| StoreError::not_found(EntityKind::Mpa, id))
    }

    pub fn all_genres(&self) -> StoreResult<Vec<Genre>> {
        self.reference.find_all_genres()
    }

    pub fn genre(&self, id: ReferenceId) -> StoreResult<Genre> {
        self.reference
            .find_genre_by_id(id)?
            .ok_or_else(|| StoreError::not_found(EntityKind::Genre, id))
    }

    fn resolve_references(&self, mut film: Film) -> StoreResult<Film> {
        film.mpa = match film.mpa.take() {
            Some(mpa) => Some(self.mpa(mpa.id)?),
            None => None,
        };

        let genre_ids: BTreeSet<ReferenceId> = film.genres.iter().map(|genre| genre.id).collect();
        film.genres = genre_ids
            .into_iter()
            .map(|id| self.genre(id))
            .collect::<StoreResult<Vec<_>>>()?;

        Ok(film)
    }

    fn require_user(&self, user_id: UserId) -> StoreResult<()> {
        match self.users.find_user_by_id(user_id)? {
            Some(_) => Ok(()),
            None => Err(StoreError::not_found(EntityKind::User, user_id)),
        }
    }
}

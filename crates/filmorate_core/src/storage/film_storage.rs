//! In-memory film store with like links.

use crate::db::DbError;
use crate::model::film::{Film, FilmId};
use crate::model::user::UserId;
use crate::model::validation::ValidationError;
use crate::storage::memory::{Entity, MemoryTable};
use crate::storage::{EntityKind, FilmStorage, StoreError, StoreResult};
use log::debug;
use std::cmp::Reverse;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard};

impl Entity for Film {
    const KIND: EntityKind = EntityKind::Film;

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Film::validate(self)
    }
}

#[derive(Debug, Default)]
struct FilmState {
    films: MemoryTable<Film>,
    likes: HashMap<FilmId, BTreeSet<UserId>>,
}

impl FilmState {
    fn require(&self, id: FilmId) -> StoreResult<()> {
        if self.films.contains(id) {
            Ok(())
        } else {
            Err(StoreError::not_found(EntityKind::Film, id))
        }
    }

    fn like_count(&self, id: FilmId) -> usize {
        self.likes.get(&id).map_or(0, BTreeSet::len)
    }
}

/// Process-local film store.
///
/// User ids passed to like operations are not checked here; the film
/// service verifies them against the user store first.
#[derive(Debug, Default)]
pub struct InMemoryFilmStorage {
    state: Mutex<FilmState>,
}

impl InMemoryFilmStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, FilmState>> {
        self.state
            .lock()
            .map_err(|_| StoreError::Storage(DbError::LockPoisoned("film store")))
    }
}

impl FilmStorage for InMemoryFilmStorage {
    fn find_all_films(&self) -> StoreResult<Vec<Film>> {
        let state = self.lock()?;
        debug!(
            "event=film_list module=storage status=ok count={}",
            state.films.len()
        );
        Ok(state.films.all())
    }

    fn find_film_by_id(&self, id: FilmId) -> StoreResult<Option<Film>> {
        Ok(self.lock()?.films.get(id).cloned())
    }

    fn create_film(&self, film: Film) -> StoreResult<Film> {
        let created = self.lock()?.films.insert_new(film)?;
        debug!(
            "event=film_create module=storage status=ok film_id={}",
            created.id
        );
        Ok(created)
    }

    fn update_film(&self, film: Film) -> StoreResult<Film> {
        let updated = self.lock()?.films.replace(film)?;
        debug!(
            "event=film_update module=storage status=ok film_id={}",
            updated.id
        );
        Ok(updated)
    }

    fn add_like(&self, film_id: FilmId, user_id: UserId) -> StoreResult<()> {
        let mut state = self.lock()?;
        state.require(film_id)?;
        state.likes.entry(film_id).or_default().insert(user_id);
        debug!("event=like_add module=storage status=ok film_id={film_id} user_id={user_id}");
        Ok(())
    }

    fn remove_like(&self, film_id: FilmId, user_id: UserId) -> StoreResult<()> {
        let mut state = self.lock()?;
        state.require(film_id)?;
        let removed = state
            .likes
            .get_mut(&film_id)
            .is_some_and(|users| users.remove(&user_id));
        if !removed {
            return Err(StoreError::LikeNotFound { film_id, user_id });
        }
        debug!("event=like_remove module=storage status=ok film_id={film_id} user_id={user_id}");
        Ok(())
    }

    fn find_popular(&self, count: usize) -> StoreResult<Vec<Film>> {
        let state = self.lock()?;
        let mut films = state.films.all();
        films.sort_by_key(|film| (Reverse(state.like_count(film.id)), film.id));
        films.truncate(count);
        Ok(films)
    }
}

//! In-memory user store with friendship links.
//!
//! # Invariants
//! - Friendships are recorded in both directions.
//! - Friend ids always reference live users.

use crate::db::DbError;
use crate::model::user::{User, UserId};
use crate::model::validation::ValidationError;
use crate::storage::memory::{Entity, MemoryTable};
use crate::storage::{EntityKind, StoreError, StoreResult, UserStorage};
use log::debug;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard};

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        User::validate(self)
    }

    fn normalize(&mut self) {
        self.apply_default_name();
    }
}

#[derive(Debug, Default)]
struct UserState {
    users: MemoryTable<User>,
    friends: HashMap<UserId, BTreeSet<UserId>>,
}

impl UserState {
    fn require(&self, id: UserId) -> StoreResult<()> {
        if self.users.contains(id) {
            Ok(())
        } else {
            Err(StoreError::not_found(EntityKind::User, id))
        }
    }

    fn friend_ids(&self, id: UserId) -> BTreeSet<UserId> {
        self.friends.get(&id).cloned().unwrap_or_default()
    }

    fn resolve(&self, ids: impl IntoIterator<Item = UserId>) -> Vec<User> {
        ids.into_iter()
            .filter_map(|id| self.users.get(id).cloned())
            .collect()
    }
}

/// Process-local user store.
#[derive(Debug, Default)]
pub struct InMemoryUserStorage {
    state: Mutex<UserState>,
}

impl InMemoryUserStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, UserState>> {
        self.state
            .lock()
            .map_err(|_| StoreError::Storage(DbError::LockPoisoned("user store")))
    }
}

impl UserStorage for InMemoryUserStorage {
    fn find_all_users(&self) -> StoreResult<Vec<User>> {
        let state = self.lock()?;
        debug!(
            "event=user_list module=storage status=ok count={}",
            state.users.len()
        );
        Ok(state.users.all())
    }

    fn find_user_by_id(&self, id: UserId) -> StoreResult<Option<User>> {
        Ok(self.lock()?.users.get(id).cloned())
    }

    fn create_user(&self, user: User) -> StoreResult<User> {
        let created = self.lock()?.users.insert_new(user)?;
        debug!(
            "event=user_create module=storage status=ok user_id={}",
            created.id
        );
        Ok(created)
    }

    fn update_user(&self, user: User) -> StoreResult<User> {
        let updated = self.lock()?.users.replace(user)?;
        debug!(
            "event=user_update module=storage status=ok user_id={}",
            updated.id
        );
        Ok(updated)
    }

    fn add_friend(&self, user_id: UserId, friend_id: UserId) -> StoreResult<()> {
        if user_id == friend_id {
            return Err(ValidationError::SelfFriendship(user_id).into());
        }

        let mut state = self.lock()?;
        state.require(user_id)?;
        state.require(friend_id)?;
        state.friends.entry(user_id).or_default().insert(friend_id);
        state.friends.entry(friend_id).or_default().insert(user_id);
        debug!("event=friend_add module=storage status=ok user_id={user_id} friend_id={friend_id}");
        Ok(())
    }

    fn remove_friend(&self, user_id: UserId, friend_id: UserId) -> StoreResult<()> {
        let mut state = self.lock()?;
        state.require(user_id)?;
        state.require(friend_id)?;
        if let Some(set) = state.friends.get_mut(&user_id) {
            set.remove(&friend_id);
        }
        if let Some(set) = state.friends.get_mut(&friend_id) {
            set.remove(&user_id);
        }
        debug!(
            "event=friend_remove module=storage status=ok user_id={user_id} friend_id={friend_id}"
        );
        Ok(())
    }

    fn find_friends(&self, user_id: UserId) -> StoreResult<Vec<User>> {
        let state = self.lock()?;
        state.require(user_id)?;
        Ok(state.resolve(state.friend_ids(user_id)))
    }

    fn find_common_friends(&self, user_id: UserId, other_id: UserId) -> StoreResult<Vec<User>> {
        let state = self.lock()?;
        state.require(user_id)?;
        state.require(other_id)?;
        let mine = state.friend_ids(user_id);
        let theirs = state.friend_ids(other_id);
        Ok(state.resolve(mine.intersection(&theirs).copied()))
    }
}

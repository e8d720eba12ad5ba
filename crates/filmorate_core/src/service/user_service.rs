//! User use-case service.

use crate::model::user::{User, UserId};
use crate::storage::{EntityKind, StoreError, StoreResult, UserStorage};

/// Use-case wrapper for user profile and friendship operations.
pub struct UserService<'a, U: UserStorage> {
    users: &'a U,
}

impl<'a, U: UserStorage> UserService<'a, U> {
    pub fn new(users: &'a U) -> Self {
        Self { users }
    }

    pub fn find_all(&self) -> StoreResult<Vec<User>> {
        self.users.find_all_users()
    }

    /// Gets one user, reporting a miss as `NotFound`.
    pub fn get(&self, id: UserId) -> StoreResult<User> {
        self.users
            .find_user_by_id(id)?
            .ok_or_else(|| StoreError::not_found(EntityKind::User, id))
    }

    pub fn create(&self, user: User) -> StoreResult<User> {
        self.users.create_user(user)
    }

    pub fn update(&self, user: User) -> StoreResult<User> {
        self.users.update_user(user)
    }

    pub fn add_friend(&self, user_id: UserId, friend_id: UserId) -> StoreResult<()> {
        self.users.add_friend(user_id, friend_id)
    }

    pub fn remove_friend(&self, user_id: UserId, friend_id: UserId) -> StoreResult<()> {
        self.users.remove_friend(user_id, friend_id)
    }

    pub fn friends(&self, user_id: UserId) -> StoreResult<Vec<User>> {
        self.users.find_friends(user_id)
    }

    pub fn common_friends(&self, user_id: UserId, other_id: UserId) -> StoreResult<Vec<User>> {
        self.users.find_common_friends(user_id, other_id)
    }
}

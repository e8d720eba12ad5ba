use chrono::NaiveDate;
use filmorate_core::{
    EntityKind, InMemoryUserStorage, StoreError, User, UserStorage, ValidationError,
};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

fn user(login: &str, name: &str) -> User {
    User::new(
        format!("{login}@mail.ru"),
        login,
        name,
        NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
    )
}

#[test]
fn create_assigns_strictly_increasing_ids() {
    let storage = InMemoryUserStorage::new();

    let first = storage.create_user(user("alpha", "Alpha")).unwrap();
    let second = storage.create_user(user("beta", "Beta")).unwrap();
    let third = storage.create_user(user("gamma", "Gamma")).unwrap();

    assert_eq!(first.id, 1);
    assert!(first.id < second.id);
    assert!(second.id < third.id);
}

#[test]
fn create_with_blank_name_uses_login() {
    let storage = InMemoryUserStorage::new();

    let created = storage.create_user(user("common", "")).unwrap();
    assert_eq!(created.name, "common");

    let stored = storage.find_user_by_id(created.id).unwrap().unwrap();
    assert_eq!(stored.name, "common");
}

#[test]
fn create_then_find_roundtrip_keeps_fields() {
    let storage = InMemoryUserStorage::new();
    let input = user("roundtrip", "Round Trip");

    let created = storage.create_user(input.clone()).unwrap();
    let loaded = storage.find_user_by_id(created.id).unwrap().unwrap();

    assert_eq!(loaded, User { id: created.id, ..input });
}

#[test]
fn find_by_id_miss_is_none() {
    let storage = InMemoryUserStorage::new();
    assert_eq!(storage.find_user_by_id(404).unwrap(), None);
}

#[test]
fn find_all_returns_users_in_creation_order() {
    let storage = InMemoryUserStorage::new();
    storage.create_user(user("one", "One")).unwrap();
    storage.create_user(user("two", "Two")).unwrap();

    let logins: Vec<_> = storage
        .find_all_users()
        .unwrap()
        .into_iter()
        .map(|item| item.login)
        .collect();
    assert_eq!(logins, ["one", "two"]);
}

#[test]
fn update_replaces_whole_record_and_defaults_name() {
    let storage = InMemoryUserStorage::new();
    let created = storage.create_user(user("before", "Before")).unwrap();

    let mut replacement = user("after", "   ");
    replacement.id = created.id;
    let updated = storage.update_user(replacement).unwrap();

    assert_eq!(updated.login, "after");
    assert_eq!(updated.name, "after");
    assert_eq!(storage.find_user_by_id(created.id).unwrap(), Some(updated));
}

#[test]
fn update_unknown_id_fails_and_leaves_store_unchanged() {
    let storage = InMemoryUserStorage::new();
    let existing = storage.create_user(user("kept", "Kept")).unwrap();

    let mut ghost = user("ghost", "Ghost");
    ghost.id = 9999;
    let err = storage.update_user(ghost).unwrap_err();

    assert!(matches!(
        err,
        StoreError::NotFound {
            kind: EntityKind::User,
            id: 9999
        }
    ));
    assert_eq!(err.to_string(), "no user with id 9999");
    assert_eq!(err.http_status(), 404);
    assert_eq!(storage.find_all_users().unwrap(), vec![existing]);
}

#[test]
fn invalid_user_is_rejected_without_consuming_an_id() {
    let storage = InMemoryUserStorage::new();

    let mut invalid = user("bad login", "Bad");
    invalid.email = "bad@mail.ru".to_string();
    let err = storage.create_user(invalid).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::LoginContainsWhitespace(_))
    ));
    assert_eq!(err.http_status(), 400);

    let created = storage.create_user(user("good", "Good")).unwrap();
    assert_eq!(created.id, 1);
}

#[test]
fn update_runs_same_validation_as_create() {
    let storage = InMemoryUserStorage::new();
    let created = storage.create_user(user("valid", "Valid")).unwrap();

    let mut invalid = created.clone();
    invalid.email = "not-an-email".to_string();
    let err = storage.update_user(invalid).unwrap_err();

    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::InvalidEmail(_))
    ));
    assert_eq!(storage.find_user_by_id(created.id).unwrap(), Some(created));
}

#[test]
fn friendship_is_mutual_and_removable() {
    let storage = InMemoryUserStorage::new();
    let alice = storage.create_user(user("alice", "Alice")).unwrap();
    let bob = storage.create_user(user("bob", "Bob")).unwrap();

    storage.add_friend(alice.id, bob.id).unwrap();
    storage.add_friend(alice.id, bob.id).unwrap();

    assert_eq!(storage.find_friends(alice.id).unwrap(), vec![bob.clone()]);
    assert_eq!(storage.find_friends(bob.id).unwrap(), vec![alice.clone()]);

    storage.remove_friend(bob.id, alice.id).unwrap();
    assert!(storage.find_friends(alice.id).unwrap().is_empty());
    assert!(storage.find_friends(bob.id).unwrap().is_empty());
}

#[test]
fn common_friends_are_intersection_sorted_by_id() {
    let storage = InMemoryUserStorage::new();
    let alice = storage.create_user(user("alice", "Alice")).unwrap();
    let bob = storage.create_user(user("bob", "Bob")).unwrap();
    let carol = storage.create_user(user("carol", "Carol")).unwrap();
    let dave = storage.create_user(user("dave", "Dave")).unwrap();

    storage.add_friend(alice.id, dave.id).unwrap();
    storage.add_friend(alice.id, carol.id).unwrap();
    storage.add_friend(bob.id, carol.id).unwrap();
    storage.add_friend(bob.id, dave.id).unwrap();

    let common = storage.find_common_friends(alice.id, bob.id).unwrap();
    assert_eq!(common, vec![carol, dave]);
}

#[test]
fn friend_operations_require_existing_users() {
    let storage = InMemoryUserStorage::new();
    let alice = storage.create_user(user("alice", "Alice")).unwrap();

    let err = storage.add_friend(alice.id, 77).unwrap_err();
    assert!(matches!(
        err,
        StoreError::NotFound {
            kind: EntityKind::User,
            id: 77
        }
    ));
    assert!(storage.find_friends(77).is_err());
    assert!(storage.find_friends(alice.id).unwrap().is_empty());
}

#[test]
fn user_cannot_befriend_themself() {
    let storage = InMemoryUserStorage::new();
    let alice = storage.create_user(user("alice", "Alice")).unwrap();

    let err = storage.add_friend(alice.id, alice.id).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::SelfFriendship(_))
    ));
}

#[test]
fn concurrent_creates_never_share_an_id() {
    let storage = Arc::new(InMemoryUserStorage::new());
    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let storage = Arc::clone(&storage);
            thread::spawn(move || {
                (0..25)
                    .map(|n| {
                        storage
                            .create_user(user(&format!("u{worker}x{n}"), ""))
                            .unwrap()
                            .id
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let ids: Vec<u64> = handles
        .into_iter()
        .flat_map(|handle| handle.join().unwrap())
        .collect();
    let unique: HashSet<_> = ids.iter().copied().collect();

    assert_eq!(ids.len(), 200);
    assert_eq!(unique.len(), 200);
    assert_eq!(unique.iter().max(), Some(&200));
}

use chrono::NaiveDate;
use filmorate_core::{EntityKind, Film, FilmStorage, InMemoryFilmStorage, StoreError, ValidationError};

const RELEASE_DATE_MESSAGE: &str = "Доступная дата релиза не может быть раньше 1895-12-28";

fn first_valid_release() -> NaiveDate {
    NaiveDate::from_ymd_opt(1895, 12, 29).unwrap()
}

fn film(name: &str) -> Film {
    Film::new(name, "x".repeat(200), first_valid_release(), 200)
}

#[test]
fn create_and_update_with_correct_data() {
    let storage = InMemoryFilmStorage::new();

    let created = storage.create_film(film("name")).unwrap();
    assert_eq!(created.id, 1);

    let mut replacement = film("name2");
    replacement.id = created.id;
    let updated = storage.update_film(replacement).unwrap();
    assert_eq!(updated.name, "name2");
    assert_eq!(storage.find_film_by_id(1).unwrap(), Some(updated));
}

#[test]
fn release_date_floor_is_inclusive() {
    let storage = InMemoryFilmStorage::new();
    let mut on_floor = film("first screening");
    on_floor.release_date = NaiveDate::from_ymd_opt(1895, 12, 28).unwrap();

    assert!(storage.create_film(on_floor).is_ok());
}

#[test]
fn early_release_date_is_rejected_on_create() {
    let storage = InMemoryFilmStorage::new();
    let mut early = film("name");
    early.release_date = first_valid_release() - chrono::Days::new(2);

    let err = storage.create_film(early).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::ReleaseDateTooEarly(_))
    ));
    assert_eq!(err.to_string(), RELEASE_DATE_MESSAGE);
    assert_eq!(err.http_status(), 400);
}

#[test]
fn early_release_date_is_rejected_on_update() {
    let storage = InMemoryFilmStorage::new();
    let created = storage.create_film(film("name")).unwrap();

    let mut early = created.clone();
    early.release_date = first_valid_release() - chrono::Days::new(2);
    let err = storage.update_film(early).unwrap_err();

    assert_eq!(err.to_string(), RELEASE_DATE_MESSAGE);
    assert_eq!(storage.find_film_by_id(created.id).unwrap(), Some(created));
}

#[test]
fn blank_name_is_rejected() {
    let err = film("  ").validate().unwrap_err();
    assert_eq!(err, ValidationError::BlankFilmName);
}

#[test]
fn description_longer_than_200_chars_is_rejected() {
    let mut long = film("name");
    long.description = "д".repeat(201);
    assert_eq!(
        long.validate(),
        Err(ValidationError::DescriptionTooLong {
            length: 201,
            max: 200
        })
    );

    long.description = "д".repeat(200);
    assert_eq!(long.validate(), Ok(()));
}

#[test]
fn zero_or_negative_duration_is_rejected() {
    let storage = InMemoryFilmStorage::new();
    for duration in [0, -1] {
        let mut invalid = film("name");
        invalid.duration = duration;
        let err = storage.create_film(invalid).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::NonPositiveDuration(d)) if d == duration
        ));
    }
    assert!(storage.find_all_films().unwrap().is_empty());
}

#[test]
fn update_with_unknown_id_is_not_found() {
    let storage = InMemoryFilmStorage::new();
    storage.create_film(film("name")).unwrap();

    let mut unknown = film("name");
    unknown.id = 2;
    let err = storage.update_film(unknown).unwrap_err();

    assert!(matches!(
        err,
        StoreError::NotFound {
            kind: EntityKind::Film,
            id: 2
        }
    ));
    assert_eq!(err.to_string(), "no film with id 2");
}

#[test]
fn find_all_returns_every_film() {
    let storage = InMemoryFilmStorage::new();
    for name in ["one", "two", "three"] {
        storage.create_film(film(name)).unwrap();
    }

    let ids: Vec<_> = storage
        .find_all_films()
        .unwrap()
        .into_iter()
        .map(|item| item.id)
        .collect();
    assert_eq!(ids, [1, 2, 3]);
}

#[test]
fn popular_orders_by_likes_then_id() {
    let storage = InMemoryFilmStorage::new();
    let quiet = storage.create_film(film("quiet")).unwrap();
    let hit = storage.create_film(film("hit")).unwrap();
    let cult = storage.create_film(film("cult")).unwrap();

    storage.add_like(hit.id, 1).unwrap();
    storage.add_like(hit.id, 2).unwrap();
    storage.add_like(hit.id, 2).unwrap();
    storage.add_like(cult.id, 3).unwrap();

    let ids: Vec<_> = storage
        .find_popular(10)
        .unwrap()
        .into_iter()
        .map(|item| item.id)
        .collect();
    assert_eq!(ids, [hit.id, cult.id, quiet.id]);

    assert_eq!(storage.find_popular(1).unwrap().len(), 1);
}

#[test]
fn removing_missing_like_is_not_found() {
    let storage = InMemoryFilmStorage::new();
    let created = storage.create_film(film("name")).unwrap();
    storage.add_like(created.id, 5).unwrap();
    storage.remove_like(created.id, 5).unwrap();

    let err = storage.remove_like(created.id, 5).unwrap_err();
    assert!(matches!(
        err,
        StoreError::LikeNotFound {
            film_id: 1,
            user_id: 5
        }
    ));
    assert!(matches!(
        storage.add_like(42, 5),
        Err(StoreError::NotFound {
            kind: EntityKind::Film,
            id: 42
        })
    ));
}

#[test]
fn film_serializes_release_date_as_iso_date() {
    let mut value = film("name");
    value.id = 3;
    let json = serde_json::to_value(&value).unwrap();

    assert_eq!(json["releaseDate"], "1895-12-29");
    assert_eq!(json["duration"], 200);
    assert!(json["mpa"].is_null());

    let decoded: Film = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, value);
}

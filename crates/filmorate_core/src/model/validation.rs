//! Field-level validation errors shared by user and film models.
//!
//! # Invariants
//! - Validation is side-effect free and identical for create and update.
//! - Messages are human-readable and name the violated rule.

use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum film description length, in characters.
pub const FILM_DESCRIPTION_MAX_CHARS: usize = 200;

/// Earliest accepted film release date (first public film screening).
pub fn earliest_release_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1895, 12, 28).unwrap_or(NaiveDate::MIN)
}

/// Validation failures raised before persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    BlankEmail,
    InvalidEmail(String),
    BlankLogin,
    LoginContainsWhitespace(String),
    BirthdayInFuture(NaiveDate),
    BlankFilmName,
    DescriptionTooLong { length: usize, max: usize },
    ReleaseDateTooEarly(NaiveDate),
    NonPositiveDuration(i64),
    SelfFriendship(u64),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankEmail => write!(f, "Электронная почта не может быть пустой"),
            Self::InvalidEmail(email) => {
                write!(f, "Некорректный адрес электронной почты: {email}")
            }
            Self::BlankLogin => write!(f, "Логин не может быть пустым"),
            Self::LoginContainsWhitespace(login) => {
                write!(f, "Логин не может содержать пробелы: `{login}`")
            }
            Self::BirthdayInFuture(date) => {
                write!(f, "Дата рождения не может быть в будущем: {date}")
            }
            Self::BlankFilmName => write!(f, "Название фильма не может быть пустым"),
            Self::DescriptionTooLong { length, max } => write!(
                f,
                "Максимальная длина описания {max} символов, получено {length}"
            ),
            Self::ReleaseDateTooEarly(_) => write!(
                f,
                "Доступная дата релиза не может быть раньше {}",
                earliest_release_date()
            ),
            Self::NonPositiveDuration(duration) => write!(
                f,
                "Продолжительность фильма должна быть положительной, получено {duration}"
            ),
            Self::SelfFriendship(id) => {
                write!(f, "Пользователь {id} не может добавить в друзья самого себя")
            }
        }
    }
}

impl Error for ValidationError {}

//! Film domain model.
//!
//! # Responsibility
//! - Define the film record held by the film store.
//! - Validate catalogue fields before writes.
//!
//! # Invariants
//! - `id == 0` means "not yet assigned"; storage assigns real ids.
//! - `mpa`/`genres` carry reference ids; names are filled by the film service.

use crate::model::reference::{Genre, Mpa};
use crate::model::validation::{
    earliest_release_date, ValidationError, FILM_DESCRIPTION_MAX_CHARS,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Store-assigned film identifier.
pub type FilmId = u64;

/// Catalogue film entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
    #[serde(default)]
    pub id: FilmId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "releaseDate")]
    pub release_date: NaiveDate,
    /// Duration in minutes.
    pub duration: i64,
    #[serde(default)]
    pub mpa: Option<Mpa>,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

impl Film {
    /// Creates an unsaved film (`id == 0`) without rating or genres.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        release_date: NaiveDate,
        duration: i64,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: description.into(),
            release_date,
            duration,
            mpa: None,
            genres: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::BlankFilmName);
        }

        let length = self.description.chars().count();
        if length > FILM_DESCRIPTION_MAX_CHARS {
            return Err(ValidationError::DescriptionTooLong {
                length,
                max: FILM_DESCRIPTION_MAX_CHARS,
            });
        }

        if self.release_date < earliest_release_date() {
            return Err(ValidationError::ReleaseDateTooEarly(self.release_date));
        }

        if self.duration <= 0 {
            return Err(ValidationError::NonPositiveDuration(self.duration));
        }

        Ok(())
    }
}

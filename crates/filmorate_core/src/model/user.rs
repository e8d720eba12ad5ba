//! User domain model.
//!
//! # Responsibility
//! - Define the user record held by the user store.
//! - Validate contact and profile fields before writes.
//!
//! # Invariants
//! - `id == 0` means "not yet assigned"; storage assigns real ids.
//! - After normalization, `name` is never blank (falls back to `login`).

use crate::model::validation::ValidationError;
use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Store-assigned user identifier.
pub type UserId = u64;

/// Registered application user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: UserId,
    pub email: String,
    pub login: String,
    /// Display name. Blank or missing values are replaced with `login`.
    #[serde(default)]
    pub name: String,
    pub birthday: NaiveDate,
}

impl User {
    /// Creates an unsaved user (`id == 0`).
    pub fn new(
        email: impl Into<String>,
        login: impl Into<String>,
        name: impl Into<String>,
        birthday: NaiveDate,
    ) -> Self {
        Self {
            id: 0,
            email: email.into(),
            login: login.into(),
            name: name.into(),
            birthday,
        }
    }

    /// Validates the record against today's local date.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_on(Local::now().date_naive())
    }

    /// Validates the record, treating `today` as the latest allowed birthday.
    pub fn validate_on(&self, today: NaiveDate) -> Result<(), ValidationError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::BlankEmail);
        }
        if !EMAIL_RE.is_match(email) {
            return Err(ValidationError::InvalidEmail(self.email.clone()));
        }

        if self.login.trim().is_empty() {
            return Err(ValidationError::BlankLogin);
        }
        if self.login.chars().any(char::is_whitespace) {
            return Err(ValidationError::LoginContainsWhitespace(self.login.clone()));
        }

        if self.birthday > today {
            return Err(ValidationError::BirthdayInFuture(self.birthday));
        }

        Ok(())
    }

    /// Replaces a blank display name with the login.
    pub fn apply_default_name(&mut self) {
        if self.name.trim().is_empty() {
            self.name = self.login.clone();
        }
    }
}

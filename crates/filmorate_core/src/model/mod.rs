//! Domain model for users, films and reference data.
//!
//! # Responsibility
//! - Define canonical records shared by storage and services.
//! - Own field-level validation rules run before every write.
//!
//! # Invariants
//! - User/Film ids are assigned by storage, never by callers.
//! - Mpa/Genre records are read-only reference data.

pub mod film;
pub mod reference;
pub mod user;
pub mod validation;

//! Use-case services over the storage traits.
//!
//! # Responsibility
//! - Orchestrate calls that span more than one store.
//! - Keep the web layer decoupled from concrete storage types.

pub mod film_service;
pub mod user_service;

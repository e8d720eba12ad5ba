//! Read-only reference entities (MPA ratings and genres).

use serde::{Deserialize, Serialize};

/// Reference data identifier.
pub type ReferenceId = u32;

/// Motion Picture Association content rating, e.g. `PG-13`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mpa {
    pub id: ReferenceId,
    #[serde(default)]
    pub name: String,
}

impl Mpa {
    pub fn new(id: ReferenceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Film genre.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
    pub id: ReferenceId,
    #[serde(default)]
    pub name: String,
}

impl Genre {
    pub fn new(id: ReferenceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

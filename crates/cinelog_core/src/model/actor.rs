//! Actor domain model.
//!
//! # Invariants
//! - The triple (name, gender, birth_date) is the actor's identity for
//!   callers and is unique in storage.
//! - `birth_date` is a valid `DD.MM.YYYY` calendar date.

use crate::model::{require_display_date, require_non_blank, ValidationError};
use serde::{Deserialize, Serialize};

/// Internal sequential key assigned by storage.
///
/// Never part of the caller-facing identity; callers resolve it through
/// the natural-key lookup when they need to mutate a row.
pub type ActorId = i64;

/// Actor gender as constrained by the storage CHECK constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Man,
    Woman,
}

impl Gender {
    /// Storage text for this gender value.
    pub fn as_db_str(self) -> &'static str {
        match self {
            Self::Man => "man",
            Self::Woman => "woman",
        }
    }

    /// Parses the storage text back into the enum.
    pub fn from_db_str(value: &str) -> Option<Self> {
        match value {
            "man" => Some(Self::Man),
            "woman" => Some(Self::Woman),
            _ => None,
        }
    }
}

/// Catalog actor identified by the (name, gender, birth_date) natural key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actor {
    pub name: String,
    pub gender: Gender,
    /// Birth date in `DD.MM.YYYY` display form.
    pub birth_date: String,
}

impl Actor {
    pub fn new(name: impl Into<String>, gender: Gender, birth_date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gender,
            birth_date: birth_date.into(),
        }
    }

    /// Checks field-level invariants before the actor reaches SQL.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_blank("name", &self.name)?;
        require_display_date("birth_date", &self.birth_date)?;
        Ok(())
    }
}

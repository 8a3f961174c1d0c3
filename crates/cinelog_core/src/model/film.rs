//! Film domain model and the actor-filmography read shape.
//!
//! # Invariants
//! - The pair (title, release_date) is the film's identity for callers and
//!   is unique in storage.
//! - `rating` stays within the inclusive 1..=10 range.
//! - `actors` may be empty; read paths that do not join associations return
//!   films with an empty actor list.

use crate::model::actor::Actor;
use crate::model::{require_display_date, require_non_blank, ValidationError};
use serde::{Deserialize, Serialize};

/// Internal sequential key assigned by storage. See [`crate::model::actor::ActorId`].
pub type FilmId = i64;

/// Catalog film identified by the (title, release_date) natural key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
    pub title: String,
    pub description: String,
    /// Release date in `DD.MM.YYYY` display form.
    pub release_date: String,
    /// Inclusive 1..=10.
    pub rating: i64,
    /// Linked actors. Consumed on insert; ignored on update.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actors: Vec<Actor>,
}

impl Film {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        release_date: impl Into<String>,
        rating: i64,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            release_date: release_date.into(),
            rating,
            actors: Vec::new(),
        }
    }

    pub fn with_actors(mut self, actors: Vec<Actor>) -> Self {
        self.actors = actors;
        self
    }

    /// Checks field-level invariants, including every listed actor.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_blank("title", &self.title)?;
        require_non_blank("description", &self.description)?;
        require_display_date("release_date", &self.release_date)?;
        if !(1..=10).contains(&self.rating) {
            return Err(ValidationError::RatingOutOfRange(self.rating));
        }
        for actor in &self.actors {
            actor.validate()?;
        }
        Ok(())
    }
}

/// One actor paired with every film they appear in.
///
/// Produced by [`crate::catalog::filmography::actors_with_films`]; entry
/// ordering is unspecified and callers must not depend on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorFilmography {
    pub actor: Actor,
    pub films: Vec<Film>,
}

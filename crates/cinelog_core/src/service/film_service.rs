//! Film use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD/listing entry points working purely on natural
//!   keys.
//! - Delegate persistence to a repository implementation.

use crate::model::film::{Film, FilmId};
use crate::repo::film_repo::FilmRepository;
use crate::repo::RepoResult;

/// Use-case wrapper around a [`FilmRepository`].
pub struct FilmService<R: FilmRepository> {
    repo: R,
}

impl<R: FilmRepository> FilmService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a film with its actor links; missing actors are created as a
    /// side effect.
    pub fn add_film(&mut self, film: &Film) -> RepoResult<FilmId> {
        self.repo.add(film)
    }

    /// Replaces the film identified by `current`'s natural key with
    /// `replacement`. Association rows are left untouched.
    pub fn update_film(&self, current: &Film, replacement: &Film) -> RepoResult<()> {
        let id = self.repo.resolve_by_natural_key(current)?;
        self.repo.update(id, replacement)
    }

    /// Deletes the film identified by its natural key together with its
    /// association rows.
    pub fn delete_film(&mut self, film: &Film) -> RepoResult<()> {
        let id = self.repo.resolve_by_natural_key(film)?;
        self.repo.delete(id)
    }

    /// Lists every film ordered by a whitelisted column.
    pub fn list_films(&self, sort_column: &str) -> RepoResult<Vec<Film>> {
        self.repo.list_films(sort_column)
    }
}

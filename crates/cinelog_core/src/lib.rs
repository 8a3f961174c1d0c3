//! Catalog repository layer for films and actors.
//!
//! This crate is the single source of truth for catalog invariants:
//! natural-key identity, the film-actor association lifecycle, fallback
//! free-text search and the actor filmography view. Transport layers call
//! in with validated entity values and receive entities or typed errors.

pub mod catalog;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use catalog::filmography::actors_with_films;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::actor::{Actor, ActorId, Gender};
pub use model::film::{ActorFilmography, Film, FilmId};
pub use model::ValidationError;
pub use repo::actor_repo::{ActorRepository, SqliteActorRepository};
pub use repo::film_repo::{FilmRepository, SqliteFilmRepository, SORT_COLUMNS};
pub use repo::{RepoError, RepoResult};
pub use search::films::{films_by_actor_name, films_by_title, search_films};
pub use service::actor_service::ActorService;
pub use service::film_service::FilmService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

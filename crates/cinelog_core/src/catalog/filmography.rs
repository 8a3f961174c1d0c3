//! Actor filmography aggregation.
//!
//! # Responsibility
//! - Pair every distinct actor with the films they appear in.
//!
//! # Invariants
//! - Each actor's film list comes from the same actor-name query the
//!   search fallback uses.
//! - Entry ordering is unspecified; callers must not depend on it.

use crate::model::actor::{Actor, Gender};
use crate::model::film::ActorFilmography;
use crate::repo::{db_err, RepoError, RepoResult};
use crate::search::films::films_by_actor_name;
use rusqlite::Connection;

/// Builds the (actor, films) pairs for every actor in the catalog.
///
/// Runs one film query per actor instead of a single join; the per-actor
/// query is shared with the search fallback, which keeps both views
/// consistent.
pub fn actors_with_films(conn: &Connection) -> RepoResult<Vec<ActorFilmography>> {
    const OP: &str = "catalog.actors_with_films";

    let mut stmt = conn
        .prepare("SELECT DISTINCT name, gender, birth_date FROM actor;")
        .map_err(db_err(OP))?;
    let mut rows = stmt.query([]).map_err(db_err(OP))?;

    let mut entries = Vec::new();
    while let Some(row) = rows.next().map_err(db_err(OP))? {
        let name: String = row.get("name").map_err(db_err(OP))?;
        let gender_text: String = row.get("gender").map_err(db_err(OP))?;
        let gender = Gender::from_db_str(&gender_text).ok_or_else(|| {
            RepoError::InvalidData(format!("invalid gender `{gender_text}` in actor.gender"))
        })?;
        let birth_date: String = row.get("birth_date").map_err(db_err(OP))?;

        let films = films_by_actor_name(conn, &name)?;
        entries.push(ActorFilmography {
            actor: Actor {
                name,
                gender,
                birth_date,
            },
            films,
        });
    }

    Ok(entries)
}

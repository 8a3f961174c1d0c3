//! Fallback free-text film search.
//!
//! # Responsibility
//! - Match films by title substring first; fall back to actor-name
//!   substring only when the title pass is empty.
//! - Signal an exhausted search as `NotFound` rather than an empty list.
//!
//! # Invariants
//! - Fragments are parameter-bound; LIKE metacharacters in the fragment
//!   match literally.
//! - Case sensitivity follows the storage collation; no normalization is
//!   applied here.

use crate::model::film::Film;
use crate::repo::film_repo::parse_film_row;
use crate::repo::{db_err, RepoError, RepoResult};
use rusqlite::Connection;

/// Searches films by fragment with title-then-actor fallback.
///
/// The title pass is the common case and avoids the association join;
/// the actor pass only runs when it yields nothing. Returns
/// [`RepoError::NotFound`] when both passes are empty.
pub fn search_films(conn: &Connection, fragment: &str) -> RepoResult<Vec<Film>> {
    let films = films_by_title(conn, fragment)?;
    if !films.is_empty() {
        return Ok(films);
    }

    let films = films_by_actor_name(conn, fragment)?;
    if films.is_empty() {
        return Err(RepoError::NotFound { what: "films" });
    }

    Ok(films)
}

/// Matches films whose title contains `fragment` as a substring.
pub fn films_by_title(conn: &Connection, fragment: &str) -> RepoResult<Vec<Film>> {
    const OP: &str = "search.films_by_title";

    collect_films(
        conn,
        OP,
        "SELECT title, description, release_date, rating
         FROM film
         WHERE title LIKE ?1 ESCAPE '\\';",
        fragment,
    )
}

/// Matches films linked to any actor whose name contains `fragment`.
///
/// Also serves the catalog aggregation, which runs this query once per
/// actor name.
pub fn films_by_actor_name(conn: &Connection, fragment: &str) -> RepoResult<Vec<Film>> {
    const OP: &str = "search.films_by_actor_name";

    collect_films(
        conn,
        OP,
        "SELECT f.title, f.description, f.release_date, f.rating
         FROM film f
         WHERE f.id IN (
             SELECT film_id
             FROM film_actor
             WHERE actor_id IN (
                 SELECT id
                 FROM actor
                 WHERE name LIKE ?1 ESCAPE '\\'
             )
         );",
        fragment,
    )
}

fn collect_films(
    conn: &Connection,
    op: &'static str,
    sql: &str,
    fragment: &str,
) -> RepoResult<Vec<Film>> {
    let pattern = like_pattern(fragment);
    let mut stmt = conn.prepare(sql).map_err(db_err(op))?;
    let mut rows = stmt.query([pattern.as_str()]).map_err(db_err(op))?;

    let mut films = Vec::new();
    while let Some(row) = rows.next().map_err(db_err(op))? {
        films.push(parse_film_row(row).map_err(db_err(op))?);
    }

    Ok(films)
}

/// Builds a contains-pattern with LIKE metacharacters escaped, so caller
/// text can never act as a wildcard.
fn like_pattern(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len() + 2);
    escaped.push('%');
    for ch in fragment.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn plain_fragment_becomes_contains_pattern() {
        assert_eq!(like_pattern("Shawshank"), "%Shawshank%");
    }

    #[test]
    fn metacharacters_are_escaped() {
        assert_eq!(like_pattern("50% off"), "%50\\% off%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("back\\slash"), "%back\\\\slash%");
    }

    #[test]
    fn empty_fragment_matches_everything() {
        assert_eq!(like_pattern(""), "%%");
    }
}

//! Film repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD over `film` rows and own the `film_actor` association
//!   lifecycle.
//! - Compose actor get-or-create when inserting a film's actor list.
//!
//! # Invariants
//! - `add` is a single transaction: film insert, actor get-or-create and
//!   association inserts commit or roll back as one unit.
//! - `delete` removes association rows before the film row in one
//!   transaction.
//! - `update` never touches association rows; the input actor list is
//!   ignored there.
//! - The `list_films` sort column is whitelist-checked before any SQL is
//!   built; it is the only input that reaches query text unbound.

use crate::model::actor::{Actor, ActorId};
use crate::model::film::{Film, FilmId};
use crate::repo::{db_err, ensure_connection_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};

const FILM_REQUIREMENTS: &[(&str, &[&str])] = &[
    (
        "film",
        &["id", "title", "description", "release_date", "rating"],
    ),
    ("film_actor", &["id", "film_id", "actor_id"]),
    ("actor", &["id", "name", "gender", "birth_date"]),
];

/// Columns accepted by [`FilmRepository::list_films`].
pub const SORT_COLUMNS: &[&str] = &["title", "release_date", "rating"];

/// Repository interface for film CRUD and listing.
pub trait FilmRepository {
    /// Inserts a film together with its actor links in one transaction and
    /// returns the new internal id. Actors missing from storage are created
    /// as a side effect; duplicate actors in the input list link once.
    fn add(&mut self, film: &Film) -> RepoResult<FilmId>;
    /// Resolves the internal id by exact (title, release_date) match.
    fn resolve_by_natural_key(&self, film: &Film) -> RepoResult<FilmId>;
    /// Overwrites title/description/release_date/rating of the row with the
    /// given id. The input's actor list is ignored.
    fn update(&self, id: FilmId, film: &Film) -> RepoResult<()>;
    /// Removes the film and its association rows in one transaction.
    fn delete(&mut self, id: FilmId) -> RepoResult<()>;
    /// Returns every film ordered ascending by one whitelisted column.
    /// Returned films carry empty actor lists.
    fn list_films(&self, sort_column: &str) -> RepoResult<Vec<Film>>;
}

/// SQLite-backed film repository.
pub struct SqliteFilmRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteFilmRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, FILM_REQUIREMENTS)?;
        Ok(Self { conn })
    }
}

impl FilmRepository for SqliteFilmRepository<'_> {
    fn add(&mut self, film: &Film) -> RepoResult<FilmId> {
        const OP: &str = "film_repo.add";
        film.validate()?;

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(db_err(OP))?;

        tx.execute(
            "INSERT INTO film (title, description, release_date, rating)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                film.title.as_str(),
                film.description.as_str(),
                film.release_date.as_str(),
                film.rating,
            ],
        )
        .map_err(db_err(OP))?;
        let film_id = tx.last_insert_rowid();

        for actor in &film.actors {
            let actor_id = get_or_create_actor(&tx, actor)?;
            // A duplicate actor in the input list hits the (film_id, actor_id)
            // uniqueness constraint; the second occurrence is skipped rather
            // than failing the whole insert.
            tx.execute(
                "INSERT OR IGNORE INTO film_actor (film_id, actor_id) VALUES (?1, ?2);",
                params![film_id, actor_id],
            )
            .map_err(db_err(OP))?;
        }

        tx.commit().map_err(db_err(OP))?;
        Ok(film_id)
    }

    fn resolve_by_natural_key(&self, film: &Film) -> RepoResult<FilmId> {
        const OP: &str = "film_repo.resolve_by_natural_key";

        let id = self
            .conn
            .query_row(
                "SELECT id FROM film WHERE title = ?1 AND release_date = ?2;",
                params![film.title.as_str(), film.release_date.as_str()],
                |row| row.get::<_, i64>(0),
            )
            .optional()
            .map_err(db_err(OP))?;

        id.ok_or(RepoError::NotFound { what: "film" })
    }

    fn update(&self, id: FilmId, film: &Film) -> RepoResult<()> {
        const OP: &str = "film_repo.update";
        film.validate()?;

        let changed = self
            .conn
            .execute(
                "UPDATE film
                 SET title = ?1, description = ?2, release_date = ?3, rating = ?4
                 WHERE id = ?5;",
                params![
                    film.title.as_str(),
                    film.description.as_str(),
                    film.release_date.as_str(),
                    film.rating,
                    id,
                ],
            )
            .map_err(db_err(OP))?;

        if changed == 0 {
            return Err(RepoError::NotFound { what: "film" });
        }

        Ok(())
    }

    fn delete(&mut self, id: FilmId) -> RepoResult<()> {
        const OP: &str = "film_repo.delete";

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(db_err(OP))?;

        // Association rows must go first to satisfy the foreign key.
        tx.execute("DELETE FROM film_actor WHERE film_id = ?1;", [id])
            .map_err(db_err(OP))?;
        let changed = tx
            .execute("DELETE FROM film WHERE id = ?1;", [id])
            .map_err(db_err(OP))?;

        if changed == 0 {
            // Dropping the transaction rolls the association delete back.
            return Err(RepoError::NotFound { what: "film" });
        }

        tx.commit().map_err(db_err(OP))?;
        Ok(())
    }

    fn list_films(&self, sort_column: &str) -> RepoResult<Vec<Film>> {
        const OP: &str = "film_repo.list_films";

        if !SORT_COLUMNS.contains(&sort_column) {
            return Err(RepoError::InvalidSortColumn(sort_column.to_string()));
        }

        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT title, description, release_date, rating
                 FROM film
                 ORDER BY {sort_column} ASC;"
            ))
            .map_err(db_err(OP))?;

        let mut rows = stmt.query([]).map_err(db_err(OP))?;
        let mut films = Vec::new();
        while let Some(row) = rows.next().map_err(db_err(OP))? {
            films.push(parse_film_row(row).map_err(db_err(OP))?);
        }

        Ok(films)
    }
}

/// Resolves an actor id inside `tx`, inserting the row when absent.
///
/// `INSERT OR IGNORE` followed by the natural-key select keeps the
/// get-or-create race-free within the enclosing transaction.
fn get_or_create_actor(tx: &Transaction<'_>, actor: &Actor) -> RepoResult<ActorId> {
    const OP: &str = "film_repo.get_or_create_actor";

    tx.execute(
        "INSERT OR IGNORE INTO actor (name, gender, birth_date) VALUES (?1, ?2, ?3);",
        params![
            actor.name.as_str(),
            actor.gender.as_db_str(),
            actor.birth_date.as_str(),
        ],
    )
    .map_err(db_err(OP))?;

    tx.query_row(
        "SELECT id
         FROM actor
         WHERE name = ?1 AND gender = ?2 AND birth_date = ?3;",
        params![
            actor.name.as_str(),
            actor.gender.as_db_str(),
            actor.birth_date.as_str(),
        ],
        |row| row.get(0),
    )
    .map_err(db_err(OP))
}

pub(crate) fn parse_film_row(row: &Row<'_>) -> Result<Film, rusqlite::Error> {
    Ok(Film {
        title: row.get("title")?,
        description: row.get("description")?,
        release_date: row.get("release_date")?,
        rating: row.get("rating")?,
        actors: Vec::new(),
    })
}

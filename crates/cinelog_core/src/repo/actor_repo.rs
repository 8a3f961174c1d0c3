//! Actor repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD over `actor` rows keyed internally by row id.
//! - Resolve the internal id from the (name, gender, birth_date) natural
//!   key as an explicit, named step.
//!
//! # Invariants
//! - Write paths call `Actor::validate()` before SQL mutations.
//! - Uniqueness of the natural key is enforced by storage, not pre-checked
//!   here; conflicts surface as [`RepoError::Constraint`].
//! - Deleting an actor who is still linked to a film is rejected by the
//!   foreign-key constraint on `film_actor`.

use crate::model::actor::{Actor, ActorId};
use crate::repo::{db_err, ensure_connection_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension};

const ACTOR_REQUIREMENTS: &[(&str, &[&str])] = &[
    ("actor", &["id", "name", "gender", "birth_date"]),
    ("film_actor", &["film_id", "actor_id"]),
];

/// Repository interface for actor CRUD operations.
pub trait ActorRepository {
    /// Inserts a new actor and returns its internal id.
    fn add(&self, actor: &Actor) -> RepoResult<ActorId>;
    /// Resolves the internal id by exact natural-key match.
    fn resolve_by_natural_key(&self, actor: &Actor) -> RepoResult<ActorId>;
    /// Overwrites all three fields of the row with the given id.
    fn update(&self, id: ActorId, actor: &Actor) -> RepoResult<()>;
    /// Removes the row with the given id.
    fn delete(&self, id: ActorId) -> RepoResult<()>;
}

/// SQLite-backed actor repository.
pub struct SqliteActorRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteActorRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, ACTOR_REQUIREMENTS)?;
        Ok(Self { conn })
    }
}

impl ActorRepository for SqliteActorRepository<'_> {
    fn add(&self, actor: &Actor) -> RepoResult<ActorId> {
        const OP: &str = "actor_repo.add";
        actor.validate()?;

        self.conn
            .execute(
                "INSERT INTO actor (name, gender, birth_date) VALUES (?1, ?2, ?3);",
                params![
                    actor.name.as_str(),
                    actor.gender.as_db_str(),
                    actor.birth_date.as_str(),
                ],
            )
            .map_err(db_err(OP))?;

        Ok(self.conn.last_insert_rowid())
    }

    fn resolve_by_natural_key(&self, actor: &Actor) -> RepoResult<ActorId> {
        const OP: &str = "actor_repo.resolve_by_natural_key";

        let id = self
            .conn
            .query_row(
                "SELECT id
                 FROM actor
                 WHERE name = ?1 AND gender = ?2 AND birth_date = ?3;",
                params![
                    actor.name.as_str(),
                    actor.gender.as_db_str(),
                    actor.birth_date.as_str(),
                ],
                |row| row.get::<_, i64>(0),
            )
            .optional()
            .map_err(db_err(OP))?;

        id.ok_or(RepoError::NotFound { what: "actor" })
    }

    fn update(&self, id: ActorId, actor: &Actor) -> RepoResult<()> {
        const OP: &str = "actor_repo.update";
        actor.validate()?;

        let changed = self
            .conn
            .execute(
                "UPDATE actor
                 SET name = ?1, gender = ?2, birth_date = ?3
                 WHERE id = ?4;",
                params![
                    actor.name.as_str(),
                    actor.gender.as_db_str(),
                    actor.birth_date.as_str(),
                    id,
                ],
            )
            .map_err(db_err(OP))?;

        if changed == 0 {
            return Err(RepoError::NotFound { what: "actor" });
        }

        Ok(())
    }

    fn delete(&self, id: ActorId) -> RepoResult<()> {
        const OP: &str = "actor_repo.delete";

        let changed = self
            .conn
            .execute("DELETE FROM actor WHERE id = ?1;", [id])
            .map_err(db_err(OP))?;

        if changed == 0 {
            return Err(RepoError::NotFound { what: "actor" });
        }

        Ok(())
    }
}

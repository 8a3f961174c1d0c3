//! Actor use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points working purely on natural keys.
//! - Delegate persistence to a repository implementation.
//!
//! # Invariants
//! - Callers never handle internal row ids; mutation re-resolves the id
//!   from the natural key first.

use crate::model::actor::Actor;
use crate::repo::actor_repo::ActorRepository;
use crate::repo::RepoResult;

/// Use-case wrapper around an [`ActorRepository`].
pub struct ActorService<R: ActorRepository> {
    repo: R,
}

impl<R: ActorRepository> ActorService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a new actor. Fails with a constraint error when the natural
    /// key already exists.
    pub fn add_actor(&self, actor: &Actor) -> RepoResult<()> {
        self.repo.add(actor).map(|_| ())
    }

    /// Replaces the actor identified by `current` with `replacement`.
    ///
    /// The lookup-then-update pair is not atomic across callers; a
    /// concurrent writer can win the resolution race.
    pub fn update_actor(&self, current: &Actor, replacement: &Actor) -> RepoResult<()> {
        let id = self.repo.resolve_by_natural_key(current)?;
        self.repo.update(id, replacement)
    }

    /// Deletes the actor identified by its natural key.
    ///
    /// Rejected with a constraint error while films still link the actor.
    pub fn delete_actor(&self, actor: &Actor) -> RepoResult<()> {
        let id = self.repo.resolve_by_natural_key(actor)?;
        self.repo.delete(id)
    }
}

//! Use-case services over the repository layer.
//!
//! # Responsibility
//! - Orchestrate repository calls into caller-facing APIs.
//! - Keep transport layers decoupled from storage details.

pub mod actor_service;
pub mod film_service;

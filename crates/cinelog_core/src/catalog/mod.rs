//! Catalog-wide read views.
//!
//! # Responsibility
//! - Build the reverse actor-to-films view on top of the search queries.

pub mod filmography;

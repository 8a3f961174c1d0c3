//! Free-text film search entry points.
//!
//! # Responsibility
//! - Expose the fallback search over film titles and actor names.
//! - Keep LIKE-pattern construction and escaping inside core.

pub mod films;

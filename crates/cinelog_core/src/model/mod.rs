//! Domain model for the film/actor catalog.
//!
//! # Responsibility
//! - Define the entity structs shared by repository, search and catalog code.
//! - Enforce field-level invariants before values reach SQL.
//!
//! # Invariants
//! - Callers identify entities by natural key (actor triple, film
//!   title + release date); internal row ids never leak into the model.
//! - Dates are carried in `DD.MM.YYYY` display form and must be valid
//!   calendar dates.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod actor;
pub mod date;
pub mod film;

/// Field-level validation failure for catalog entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required string field is empty or blank.
    EmptyField(&'static str),
    /// A date field does not hold a valid `DD.MM.YYYY` calendar date.
    InvalidDate {
        field: &'static str,
        value: String,
    },
    /// Film rating outside the inclusive 1..=10 range.
    RatingOutOfRange(i64),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "required field `{field}` is empty"),
            Self::InvalidDate { field, value } => {
                write!(f, "field `{field}` holds `{value}`, expected DD.MM.YYYY")
            }
            Self::RatingOutOfRange(rating) => {
                write!(f, "rating {rating} is outside the allowed range 1..=10")
            }
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_non_blank(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}

pub(crate) fn require_display_date(
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    if date::is_valid_display_date(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidDate {
            field,
            value: value.to_string(),
        })
    }
}

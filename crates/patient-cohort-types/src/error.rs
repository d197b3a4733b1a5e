//! Boundary errors for the cohort crates
//!
//! The query and statistics operations themselves never fail. These errors
//! only come out of string parsing at the edge, where a caller turns
//! untyped input (CLI flags, URL parameters) into typed keys.

use thiserror::Error;

/// Result type for cohort parsing operations
pub type Result<T> = std::result::Result<T, CohortError>;

/// Errors raised while parsing typed values from strings
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CohortError {
    /// Sort key does not name a sortable attribute
    #[error("Unknown sort key: {key}")]
    UnknownSortKey { key: String },

    /// Sort direction is neither ascending nor descending
    #[error("Unknown sort direction: {direction} (expected asc or desc)")]
    UnknownSortDirection { direction: String },

    /// Value is not one of an enum's variants
    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },

    /// Text does not denote a calendar date
    #[error("Invalid date: {value}")]
    InvalidDate { value: String },
}

impl CohortError {
    /// Create an unknown sort key error
    pub fn unknown_sort_key(key: impl Into<String>) -> Self {
        Self::UnknownSortKey { key: key.into() }
    }

    /// Create an unknown sort direction error
    pub fn unknown_sort_direction(direction: impl Into<String>) -> Self {
        Self::UnknownSortDirection {
            direction: direction.into(),
        }
    }

    /// Create an unknown variant error
    pub fn unknown_variant(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }

    /// Create an invalid date error
    pub fn invalid_date(value: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
        }
    }
}

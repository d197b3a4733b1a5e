//! Patient cohort query and analytics
//!
//! This crate ties the cohort pipeline together:
//! - Normalizing raw search-form input into a filter specification
//! - Filtering and sorting a loaded cohort
//! - Deriving dashboard statistics
//!
//! # Example
//!
//! ```ignore
//! use patient_cohort::{CohortQuery, RawSearchInput, SortKey, SortSpec};
//!
//! let raw = RawSearchInput { has_insurance: Some(false.into()), ..Default::default() };
//! let query = CohortQuery::from_raw(&raw, Some(SortSpec::asc(SortKey::LastName)));
//! let uninsured = query.run(&records);
//! ```

// Re-export the pipeline layers
pub use patient_cohort_query as query;
pub use patient_cohort_stats as stats;
pub use patient_cohort_types as types;

// Convenience re-exports
pub use patient_cohort_query::{
    FilterSpec, RawSearchInput, RawValue, SortDirection, SortKey, SortSpec, filter_cohort,
    normalize, sort_cohort,
};
pub use patient_cohort_stats::{AggregateOptions, StatisticsSnapshot, aggregate};
pub use patient_cohort_types::{
    CohortError, Gender, PatientRecord, PatientStatus, Result, age_from_birth_date,
};

mod pipeline;

pub use pipeline::{CohortQuery, cohort_statistics};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;

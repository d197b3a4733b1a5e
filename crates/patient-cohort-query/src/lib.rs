//! Patient cohort querying
//!
//! The query half of the cohort pipeline:
//!
//! ```text
//! RawSearchInput --normalize--> FilterSpec
//!     --filter_cohort--> [&PatientRecord]
//!     --sort_cohort--> [&PatientRecord]
//! ```
//!
//! - **Normalization**: trims text, resolves select sentinels, parses numbers
//!   and dates fail-soft, resolves tri-state checkboxes
//! - **Predicates**: conjunction of every supplied constraint; inverted
//!   ranges match nothing
//! - **Sorting**: stable, type-aware, missing values last
//!
//! Every operation is pure and synchronous. Results borrow from the input
//! slice; records are never copied.
//!
//! # Example
//!
//! ```ignore
//! use patient_cohort_query::{
//!     RawSearchInput, SortKey, SortSpec, filter_cohort, normalize, sort_cohort,
//! };
//!
//! let raw = RawSearchInput { age_from: Some(65u32.into()), ..Default::default() };
//! let seniors = filter_cohort(&records, &normalize(&raw));
//! let ordered = sort_cohort(seniors, &SortSpec::desc(SortKey::Age));
//! ```

pub mod normalize;
pub mod predicate;
pub mod raw;
pub mod sort;
pub mod spec;

pub use normalize::normalize;
pub use predicate::{filter_cohort, matches};
pub use raw::{RawSearchInput, RawValue};
pub use sort::{SortDirection, SortKey, SortSpec, SortValue, make_comparator, sort_cohort};
pub use spec::{Bounds, FilterSpec};

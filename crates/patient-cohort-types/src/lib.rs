//! Patient cohort data model
//!
//! Shared types for the cohort pipeline:
//!
//! - [`PatientRecord`]: the closed, read-only record the pipeline consumes
//! - [`Gender`], [`BloodGroup`], [`PatientStatus`]: record enumerations
//! - [`age_from_birth_date`] and [`parse_date`]: calendar helpers
//! - [`CohortError`]: boundary parsing errors

pub mod demographics;
pub mod error;
pub mod record;
pub mod temporal;

pub use demographics::{BloodGroup, Gender, PatientStatus};
pub use error::{CohortError, Result};
pub use record::{InsuranceInfo, PatientRecord};
pub use temporal::{age_from_birth_date, parse_date};

//! CLI functionality for the cohort tool
//!
//! This module contains all CLI-related functionality including:
//! - Loading patients and search input
//! - The query, stats and age commands
//! - Output formatting
//! - Log initialization

pub mod age;
pub mod input;
pub mod logging;
pub mod output;
pub mod query;
pub mod stats;

//! Age command implementation

use super::output;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use patient_cohort_types::{age_from_birth_date, parse_date};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration for age command
pub struct AgeConfig {
    pub birth: String,
    pub as_of: Option<String>,
    pub output_format: Option<String>,
    pub output_file: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AgeReport {
    birth_date: NaiveDate,
    as_of: NaiveDate,
    age: u32,
}

/// Print the whole-year age for a birth date
pub fn age(config: &AgeConfig) -> Result<()> {
    let content = render_age(config)?;
    output::write_output(&content, config.output_file.as_deref())
}

pub fn render_age(config: &AgeConfig) -> Result<String> {
    let format = output::OutputFormat::resolve(config.output_format.as_deref())?;
    let birth_date = parse_date(&config.birth).context("Invalid --birth")?;
    let as_of = match &config.as_of {
        Some(date) => parse_date(date).context("Invalid --as-of")?,
        None => Local::now().date_naive(),
    };

    let report = AgeReport {
        birth_date,
        as_of,
        age: age_from_birth_date(birth_date, as_of),
    };
    output::render(&report, format, |r| r.age.to_string())
}

//! Stats command implementation

use super::{input, output};
use crate::pipeline::{CohortQuery, cohort_statistics};
use anyhow::{Context, Result};
use log::info;
use patient_cohort_stats::AggregateOptions;
use patient_cohort_types::parse_date;
use std::path::PathBuf;

/// Configuration for stats command
pub struct StatsConfig {
    pub patients: PathBuf,
    pub as_of: Option<String>,
    pub period_days: Option<u32>,
    pub top: Option<usize>,
    pub filter: Option<PathBuf>,
    pub params: Vec<String>,
    pub output_format: Option<String>,
    pub output_file: Option<PathBuf>,
}

impl StatsConfig {
    /// Aggregation options from the flags; the local date when `--as-of`
    /// is absent
    pub fn options(&self) -> Result<AggregateOptions> {
        let mut options = match &self.as_of {
            Some(date) => AggregateOptions::new(parse_date(date).context("Invalid --as-of")?),
            None => AggregateOptions::today(),
        };
        if let Some(days) = self.period_days {
            options = options.with_period_length_days(days);
        }
        if let Some(top) = self.top {
            options = options.with_top_n(top);
        }
        Ok(options)
    }

    fn is_filtered(&self) -> bool {
        self.filter.is_some() || !self.params.is_empty()
    }
}

/// Print dashboard statistics for a patients file
pub fn stats(config: &StatsConfig) -> Result<()> {
    let content = render_stats(config)?;
    output::write_output(&content, config.output_file.as_deref())
}

/// Aggregate the (optionally filtered) cohort and render the snapshot
pub fn render_stats(config: &StatsConfig) -> Result<String> {
    let format = output::OutputFormat::resolve(config.output_format.as_deref())?;
    let options = config.options()?;
    let records = input::load_patients(&config.patients)?;

    let snapshot = if config.is_filtered() {
        let raw = input::load_search(config.filter.as_deref(), &config.params)?;
        let cohort = CohortQuery::from_raw(&raw, None).run(&records);
        info!("aggregating {} of {} patients", cohort.len(), records.len());
        cohort_statistics(cohort, &options)
    } else {
        cohort_statistics(&records, &options)
    };

    output::render(&snapshot, format, output::statistics_table)
}

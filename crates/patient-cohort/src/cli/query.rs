//! Query command implementation

use super::{input, output};
use crate::pipeline::CohortQuery;
use anyhow::{Context, Result};
use log::info;
use patient_cohort_query::SortSpec;
use std::path::PathBuf;

/// Configuration for query command
pub struct QueryConfig {
    pub patients: PathBuf,
    pub filter: Option<PathBuf>,
    pub params: Vec<String>,
    pub sort: Option<String>,
    pub direction: String,
    pub output_format: Option<String>,
    pub output_file: Option<PathBuf>,
}

/// Filter and sort a patients file
pub fn query(config: &QueryConfig) -> Result<()> {
    let content = render_query(config)?;
    output::write_output(&content, config.output_file.as_deref())
}

/// Run the query and render the matching records
pub fn render_query(config: &QueryConfig) -> Result<String> {
    let format = output::OutputFormat::resolve(config.output_format.as_deref())?;

    let sort = config
        .sort
        .as_deref()
        .map(|key| SortSpec::parse(key, &config.direction))
        .transpose()
        .context("Invalid sort")?;

    let records = input::load_patients(&config.patients)?;
    let raw = input::load_search(config.filter.as_deref(), &config.params)?;
    let query = CohortQuery::from_raw(&raw, sort);

    let matched = query.run(&records);
    info!("{} of {} patients match", matched.len(), records.len());

    output::render(matched.as_slice(), format, output::patients_table)
}

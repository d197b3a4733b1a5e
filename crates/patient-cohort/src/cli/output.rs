//! Output formatting utilities

use anyhow::{Context, Result, bail};
use colored::Colorize;
use patient_cohort_stats::{RankedLabel, StatisticsSnapshot};
use patient_cohort_types::PatientRecord;
use serde::Serialize;
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::str::FromStr;
use tabled::{Table, Tabled, settings::Style};

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    #[default]
    JsonPretty,
    Table,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" | "json-pretty" => Ok(Self::JsonPretty),
            "table" => Ok(Self::Table),
            other => bail!("Unknown output format: '{}'. Expected json, pretty or table", other),
        }
    }
}

impl OutputFormat {
    /// Resolve the `--format` flag; pretty JSON when absent
    pub fn resolve(format: Option<&str>) -> Result<Self> {
        format.map_or(Ok(Self::default()), str::parse)
    }
}

/// Set up color output based on user preference
pub fn setup_colors(mode: &str) {
    match mode.to_lowercase().as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => colored::control::set_override(io::stderr().is_terminal()),
    }
}

/// Format an error for display
pub fn format_error(error: &anyhow::Error) -> String {
    format!("{} {:#}", "Error:".red().bold(), error)
}

/// Format a success message for display
pub fn format_success(message: &str) -> String {
    format!("{} {}", "Success:".green().bold(), message)
}

/// Write output to a file or stdout
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    if let Some(path) = output_file {
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        writeln!(file, "{content}")
            .with_context(|| format!("Failed to write to output file: {}", path.display()))?;
        eprintln!(
            "{}",
            format_success(&format!("Output written to {}", path.display()))
        );
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Serialize a value as compact or pretty JSON
pub fn format_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    if pretty {
        serde_json::to_string_pretty(value).context("Failed to serialize JSON")
    } else {
        serde_json::to_string(value).context("Failed to serialize JSON")
    }
}

#[derive(Tabled)]
struct PatientRow {
    #[tabled(rename = "Patient ID")]
    patient_id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Age")]
    age: u32,
    #[tabled(rename = "Gender")]
    gender: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Blood")]
    blood_group: String,
    #[tabled(rename = "Registered")]
    registered: String,
    #[tabled(rename = "Last Visit")]
    last_visit: String,
    #[tabled(rename = "Insured")]
    insured: String,
}

impl From<&PatientRecord> for PatientRow {
    fn from(record: &PatientRecord) -> Self {
        Self {
            patient_id: record.patient_id.clone(),
            name: record.full_name(),
            age: record.age,
            gender: record.gender.to_string(),
            status: record.status.to_string(),
            blood_group: record.blood_group.map(|b| b.to_string()).unwrap_or_default(),
            registered: record.registration_date.to_string(),
            last_visit: record.last_visit_date.map(|d| d.to_string()).unwrap_or_default(),
            insured: if record.has_insurance() { "yes" } else { "no" }.to_string(),
        }
    }
}

/// Render records as a table, one row per patient
pub fn patients_table(records: &[&PatientRecord]) -> String {
    if records.is_empty() {
        return "(no matching patients)".to_string();
    }
    let rows: Vec<PatientRow> = records.iter().map(|r| PatientRow::from(*r)).collect();
    Table::new(rows).with(Style::modern()).to_string()
}

#[derive(Tabled)]
struct KeyValue {
    #[tabled(rename = "Metric")]
    key: String,
    #[tabled(rename = "Value")]
    value: String,
}

impl KeyValue {
    fn new(key: impl Into<String>, value: impl ToString) -> Self {
        Self {
            key: key.into(),
            value: value.to_string(),
        }
    }
}

fn share(count: usize, percent: f64) -> String {
    format!("{count} ({percent:.1}%)")
}

fn ranking(labels: &[RankedLabel]) -> String {
    if labels.is_empty() {
        return "-".to_string();
    }
    labels
        .iter()
        .map(|l| format!("{} {}", l.label, share(l.count, l.percent)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a snapshot as a two-column metric table
pub fn statistics_table(snapshot: &StatisticsSnapshot) -> String {
    let genders = &snapshot.gender_distribution;
    let insurance = &snapshot.insurance_distribution;

    let mut rows = vec![
        KeyValue::new("Total patients", snapshot.total_count),
        KeyValue::new("New this period", snapshot.new_in_current_period),
        KeyValue::new("New previous period", snapshot.new_in_previous_period),
        KeyValue::new("Growth", format!("{:.1}%", snapshot.growth_rate_percent)),
        KeyValue::new("Average age", format!("{:.1}", snapshot.average_age)),
        KeyValue::new("Pediatric (<18)", snapshot.age_bands.pediatric),
        KeyValue::new("Adult (18-64)", snapshot.age_bands.adult),
        KeyValue::new("Senior (65+)", snapshot.age_bands.senior),
        KeyValue::new("Male", share(genders.male.count, genders.male.percent)),
        KeyValue::new("Female", share(genders.female.count, genders.female.percent)),
        KeyValue::new("Other", share(genders.other.count, genders.other.percent)),
        KeyValue::new("Insured", share(insurance.insured.count, insurance.insured.percent)),
        KeyValue::new(
            "Uninsured",
            share(insurance.uninsured.count, insurance.uninsured.percent),
        ),
    ];
    rows.extend(snapshot.status_distribution.iter().map(|(status, s)| {
        KeyValue::new(format!("Status: {status}"), share(s.count, s.percent))
    }));
    rows.push(KeyValue::new("Top conditions", ranking(&snapshot.top_conditions)));
    rows.push(KeyValue::new("Top allergies", ranking(&snapshot.top_allergies)));

    Table::new(rows).with(Style::modern()).to_string()
}

/// Render `value` as JSON in the requested flavour, or fall back to the
/// given table renderer
pub fn render<T, F>(value: &T, format: OutputFormat, table: F) -> Result<String>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Json => format_json(value, false),
        OutputFormat::JsonPretty => format_json(value, true),
        OutputFormat::Table => Ok(table(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use patient_cohort_types::{BloodGroup, Gender, InsuranceInfo};
    use rstest::rstest;

    fn record() -> PatientRecord {
        PatientRecord::new(
            "3",
            "P-0003",
            "Grace",
            "Hopper",
            85,
            Gender::Female,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )
        .with_middle_name("Brewster")
        .with_blood_group(BloodGroup::ONegative)
        .with_insurance(InsuranceInfo::active("Medicare"))
    }

    #[rstest]
    #[case("json", OutputFormat::Json)]
    #[case("pretty", OutputFormat::JsonPretty)]
    #[case("JSON-PRETTY", OutputFormat::JsonPretty)]
    #[case("table", OutputFormat::Table)]
    fn test_output_format_parse(#[case] input: &str, #[case] expected: OutputFormat) {
        assert_eq!(input.parse::<OutputFormat>().unwrap(), expected);
    }

    #[test]
    fn test_output_format_resolve() {
        assert_eq!(OutputFormat::resolve(None).unwrap(), OutputFormat::JsonPretty);
        assert!(OutputFormat::resolve(Some("xml")).is_err());
    }

    #[test]
    fn test_patients_table() {
        let record = record();
        let table = patients_table(&[&record]);

        assert!(table.contains("P-0003"));
        assert!(table.contains("Grace Brewster Hopper"));
        assert!(table.contains("O-"));
        assert!(table.contains("yes"));
        assert_eq!(patients_table(&[]), "(no matching patients)");
    }

    #[test]
    fn test_render_json() {
        let record = record();
        let json = render(&[&record], OutputFormat::Json, |_| String::new()).unwrap();

        assert!(json.starts_with('['));
        assert!(json.contains("\"patientId\":\"P-0003\""));
    }
}

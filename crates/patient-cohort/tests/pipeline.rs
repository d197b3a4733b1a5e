//! End-to-end pipeline tests
//!
//! Raw form input through normalization, filtering, sorting and statistics.

use chrono::NaiveDate;
use patient_cohort::types::InsuranceInfo;
use patient_cohort::{
    AggregateOptions, CohortQuery, Gender, PatientRecord, PatientStatus, RawSearchInput, SortKey,
    SortSpec, cohort_statistics,
};
use pretty_assertions::assert_eq;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn clinic() -> Vec<PatientRecord> {
    vec![
        PatientRecord::new("1", "P-0001", "Ada", "Lovelace", 36, Gender::Female, date(2024, 6, 20))
            .with_insurance(InsuranceInfo::active("Acme Health").with_type("private"))
            .with_allergies(["Penicillin"]),
        PatientRecord::new("2", "P-0002", "Alan", "Turing", 41, Gender::Male, date(2024, 5, 10))
            .with_chronic_diseases(["Asthma"]),
        PatientRecord::new("3", "P-0003", "Grace", "Hopper", 85, Gender::Female, date(2024, 6, 1))
            .with_insurance(InsuranceInfo::active("Medicare").with_type("government"))
            .with_chronic_diseases(["Hypertension", "Asthma"]),
        PatientRecord::new("4", "P-0004", "Edsger", "Dijkstra", 72, Gender::Male, date(2023, 1, 1))
            .with_status(PatientStatus::Deceased),
        PatientRecord::new("5", "P-0005", "Barbara", "Liskov", 12, Gender::Female, june(29))
            .with_insurance(InsuranceInfo::active("Acme Health"))
            .with_chronic_diseases(["Asthma"]),
    ]
}

fn june(day: u32) -> NaiveDate {
    date(2024, 6, day)
}

fn ids(records: &[&PatientRecord]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

#[test]
fn test_unconstrained_query_keeps_input_order() {
    let records = clinic();
    let query = CohortQuery::from_raw(&RawSearchInput::default(), None);

    assert!(query.filter.is_unconstrained());
    assert_eq!(ids(&query.run(&records)), vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn test_filter_then_sort() {
    let records = clinic();
    let raw = RawSearchInput {
        gender: Some("FEMALE".into()),
        status: Some("all".into()),
        ..Default::default()
    };
    let query = CohortQuery::from_raw(&raw, Some(SortSpec::desc(SortKey::Age)));

    assert_eq!(ids(&query.run(&records)), vec!["3", "1", "5"]);
}

#[test]
fn test_blank_form_fields_do_not_narrow() {
    let records = clinic();
    let raw = RawSearchInput {
        first_name: Some("   ".into()),
        age_from: Some("abc".into()),
        has_insurance: Some("true".into()),
        ..Default::default()
    };

    assert_eq!(CohortQuery::from_raw(&raw, None).run(&records).len(), 5);
}

#[test]
fn test_statistics_over_filtered_cohort() {
    let records = clinic();
    let raw = RawSearchInput {
        has_chronic_diseases: Some(true.into()),
        ..Default::default()
    };
    let cohort = CohortQuery::from_raw(&raw, None).run(&records);
    let options = AggregateOptions::new(date(2024, 6, 30)).with_top_n(2);
    let snapshot = cohort_statistics(cohort, &options);

    assert_eq!(snapshot.total_count, 3);
    // Registered 2024-06-01 and 2024-06-29
    assert_eq!(snapshot.new_in_current_period, 2);
    // Registered 2024-05-10
    assert_eq!(snapshot.new_in_previous_period, 1);
    assert_eq!(snapshot.growth_rate_percent, 100.0);
    assert_eq!(snapshot.top_conditions.len(), 2);
    assert_eq!(snapshot.top_conditions[0].label, "Asthma");
    assert_eq!(snapshot.top_conditions[0].count, 3);
    assert_eq!(snapshot.top_conditions[0].percent, 100.0);
    assert_eq!(snapshot.top_conditions[1].label, "Hypertension");
    assert_eq!(snapshot.insurance_distribution.insured.count, 2);
}

#[test]
fn test_statistics_over_whole_clinic() {
    let records = clinic();
    let snapshot = cohort_statistics(&records, &AggregateOptions::new(date(2024, 6, 30)));

    assert_eq!(snapshot.total_count, 5);
    assert_eq!(snapshot.age_bands.pediatric, 1);
    assert_eq!(snapshot.age_bands.adult, 2);
    assert_eq!(snapshot.age_bands.senior, 2);
    assert_eq!(snapshot.status_distribution[&PatientStatus::Deceased].count, 1);
    assert_eq!(snapshot.top_allergies[0].label, "Penicillin");
}

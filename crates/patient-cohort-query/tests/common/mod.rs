//! Shared fixtures and proptest strategies for query tests

#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use patient_cohort_types::{Gender, InsuranceInfo, PatientRecord};
use proptest::prelude::*;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn patient(id: &str, first: &str, last: &str, age: u32, gender: Gender) -> PatientRecord {
    PatientRecord::new(id, format!("P-{id:0>4}"), first, last, age, gender, date(2024, 1, 15))
}

/// Five patients: three insured, two not
pub fn ward() -> Vec<PatientRecord> {
    vec![
        patient("1", "Ada", "Lovelace", 36, Gender::Female)
            .with_insurance(InsuranceInfo::active("Acme Health"))
            .with_allergies(["Penicillin"]),
        patient("2", "Alan", "Turing", 41, Gender::Male)
            .with_chronic_diseases(["Asthma"]),
        patient("3", "Grace", "Hopper", 85, Gender::Female)
            .with_insurance(InsuranceInfo::active("Medicare").with_type("government"))
            .with_chronic_diseases(["Hypertension", "Diabetes"])
            .with_last_visit(date(2024, 5, 2)),
        patient("4", "Edsger", "Dijkstra", 72, Gender::Male)
            .with_insurance(InsuranceInfo {
                is_active: false,
                provider: Some("Lapsed Mutual".to_string()),
                insurance_type: None,
            }),
        patient("5", "Barbara", "Liskov", 12, Gender::Female)
            .with_insurance(InsuranceInfo::active("Acme Health"))
            .with_phone("555-0100"),
    ]
}

pub fn ids(records: &[&PatientRecord]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

pub fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..1500).prop_map(|offset| date(2021, 1, 1) + Duration::days(offset))
}

pub fn arb_gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female), Just(Gender::Other)]
}

fn tags(choices: [&'static str; 3]) -> impl Strategy<Value = Vec<&'static str>> {
    proptest::collection::vec(proptest::sample::select(choices.to_vec()), 0..3)
}

pub fn arb_record() -> impl Strategy<Value = PatientRecord> {
    let names = ("[A-Z][a-z]{1,6}", "[A-Z][a-z]{1,8}");
    let dates = (arb_date(), proptest::option::of(arb_date()));
    let tag_sets = (
        tags(["Penicillin", "Latex", "Peanuts"]),
        tags(["Asthma", "Diabetes", "diabetes"]),
    );
    let contact = (any::<bool>(), proptest::option::of("[0-9]{3}-[0-9]{4}"));

    (names, 0u32..100, arb_gender(), dates, tag_sets, contact).prop_map(
        |((first, last), age, gender, (registered, visited), (allergies, conditions), contact)| {
            let (insured, phone) = contact;
            let mut record = PatientRecord::new("", "", first, last, age, gender, registered)
                .with_allergies(allergies)
                .with_chronic_diseases(conditions);
            record.last_visit_date = visited;
            record.phone = phone;
            record.insurance.is_active = insured;
            record
        },
    )
}

/// Records whose `id` is their position, so input order can be checked
pub fn arb_cohort(max: usize) -> impl Strategy<Value = Vec<PatientRecord>> {
    proptest::collection::vec(arb_record(), 0..max).prop_map(|mut records| {
        for (index, record) in records.iter_mut().enumerate() {
            record.id = index.to_string();
            record.patient_id = format!("P-{index:0>4}");
        }
        records
    })
}

pub fn position(record: &PatientRecord) -> usize {
    record.id.parse().unwrap()
}

//! Predicate evaluation of a [`FilterSpec`] against patient records
//!
//! A record matches when every supplied constraint holds. There is no OR
//! mode: the quick search is one constraint that looks at several fields,
//! and it is ANDed with the rest like any other.

use crate::spec::FilterSpec;
use log::trace;
use patient_cohort_types::PatientRecord;

/// Whether `record` satisfies every constraint in `spec`.
///
/// Total over partially populated records: a missing optional field fails
/// any constraint placed on it and passes when none is.
pub fn matches(record: &PatientRecord, spec: &FilterSpec) -> bool {
    // An inverted range admits nothing, including records missing the field
    if spec.has_empty_range() {
        return false;
    }

    matches_search(record, spec.search.as_deref())
        && contains_ci(Some(&record.first_name), spec.first_name.as_deref())
        && contains_ci(Some(&record.last_name), spec.last_name.as_deref())
        && contains_ci(Some(&record.patient_id), spec.patient_id.as_deref())
        && contains_ci(record.phone.as_deref(), spec.phone.as_deref())
        && contains_ci(record.email.as_deref(), spec.email.as_deref())
        && exact(Some(record.status), spec.status)
        && exact(Some(record.gender), spec.gender)
        && exact(record.blood_group, spec.blood_group)
        && exact_text(
            record.insurance.insurance_type.as_deref(),
            spec.insurance_type.as_deref(),
        )
        && spec.age.admits(Some(record.age))
        && spec.registration_date.admits(Some(record.registration_date))
        && spec.last_visit_date.admits(record.last_visit_date)
        && tri_state(record.has_allergies(), spec.has_allergies)
        && tri_state(record.has_chronic_diseases(), spec.has_chronic_diseases)
        && tri_state(record.has_insurance(), spec.has_insurance)
}

/// Records matching `spec`, in input order, borrowed from `records`
pub fn filter_cohort<'a>(
    records: &'a [PatientRecord],
    spec: &FilterSpec,
) -> Vec<&'a PatientRecord> {
    let result: Vec<&PatientRecord> = records.iter().filter(|r| matches(r, spec)).collect();
    trace!("filter_cohort kept {} of {} records", result.len(), records.len());
    result
}

/// Case-insensitive containment of `needle` in `haystack`.
///
/// A blank needle imposes nothing; a missing haystack fails a real needle.
fn contains_ci(haystack: Option<&str>, needle: Option<&str>) -> bool {
    let Some(needle) = needle.map(str::trim).filter(|n| !n.is_empty()) else {
        return true;
    };

    haystack.is_some_and(|h| h.to_lowercase().contains(&needle.to_lowercase()))
}

fn matches_search(record: &PatientRecord, search: Option<&str>) -> bool {
    if search.is_none_or(|s| s.trim().is_empty()) {
        return true;
    }

    let full_name = record.full_name();
    [
        Some(full_name.as_str()),
        Some(record.patient_id.as_str()),
        record.phone.as_deref(),
        record.email.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| contains_ci(Some(field), search))
}

fn exact<T: PartialEq>(value: Option<T>, wanted: Option<T>) -> bool {
    match wanted {
        None => true,
        Some(w) => value.is_some_and(|v| v == w),
    }
}

fn exact_text(value: Option<&str>, wanted: Option<&str>) -> bool {
    match wanted.map(str::trim).filter(|w| !w.is_empty()) {
        None => true,
        Some(w) => value.is_some_and(|v| v.trim() == w),
    }
}

fn tri_state(actual: bool, wanted: Option<bool>) -> bool {
    wanted.is_none_or(|w| w == actual)
}

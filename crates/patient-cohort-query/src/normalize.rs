//! Criteria normalization: raw form input to [`FilterSpec`]
//!
//! Every defaulting rule for search input lives here. Malformed values
//! become "no constraint" and are reported at debug level; nothing in this
//! module fails.

use crate::raw::{RawSearchInput, RawValue};
use crate::spec::{Bounds, FilterSpec};
use chrono::NaiveDate;
use log::debug;
use patient_cohort_types::parse_date;
use std::str::FromStr;

/// Select-box sentinel meaning "no filter"
const ANY_SENTINEL: &str = "all";

/// Build the canonical filter spec for one query execution.
///
/// Pure and deterministic; no field of the result is required.
pub fn normalize(raw: &RawSearchInput) -> FilterSpec {
    FilterSpec {
        search: text("search", raw.search.as_ref()),
        first_name: text("firstName", raw.first_name.as_ref()),
        last_name: text("lastName", raw.last_name.as_ref()),
        patient_id: text("patientId", raw.patient_id.as_ref()),
        phone: text("phone", raw.phone.as_ref()),
        email: text("email", raw.email.as_ref()),

        status: choice("status", raw.status.as_ref()),
        gender: choice("gender", raw.gender.as_ref()),
        blood_group: choice("bloodGroup", raw.blood_group.as_ref()),
        insurance_type: text("insuranceType", raw.insurance_type.as_ref())
            .filter(|value| !value.eq_ignore_ascii_case(ANY_SENTINEL)),

        age: Bounds::new(
            whole_number("ageFrom", raw.age_from.as_ref()),
            whole_number("ageTo", raw.age_to.as_ref()),
        ),
        registration_date: Bounds::new(
            date("registrationDateFrom", raw.registration_date_from.as_ref()),
            date("registrationDateTo", raw.registration_date_to.as_ref()),
        ),
        last_visit_date: Bounds::new(
            date("lastVisitDateFrom", raw.last_visit_date_from.as_ref()),
            date("lastVisitDateTo", raw.last_visit_date_to.as_ref()),
        ),

        has_allergies: tri_state("hasAllergies", raw.has_allergies.as_ref()),
        has_chronic_diseases: tri_state("hasChronicDiseases", raw.has_chronic_diseases.as_ref()),
        has_insurance: tri_state("hasInsurance", raw.has_insurance.as_ref()),
    }
}

/// Trimmed text; blank is unset. Numbers and dates keep their textual form.
fn text(field: &str, value: Option<&RawValue>) -> Option<String> {
    let rendered = match value? {
        RawValue::Text(s) => s.trim().to_string(),
        RawValue::Number(n) if n.is_finite() && n.fract() == 0.0 => format!("{n:.0}"),
        RawValue::Number(n) if n.is_finite() => n.to_string(),
        RawValue::Date(d) => d.to_string(),
        other => {
            debug!("ignoring {} value for text field {}", other.kind(), field);
            return None;
        }
    };

    (!rendered.is_empty()).then_some(rendered)
}

/// Enum select; blank, the `all` sentinel, and unknown values are unset
fn choice<T: FromStr>(field: &str, value: Option<&RawValue>) -> Option<T> {
    let RawValue::Text(s) = value? else {
        debug!("ignoring non-text value for select field {}", field);
        return None;
    };

    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ANY_SENTINEL) {
        return None;
    }

    match trimmed.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            debug!("ignoring unknown {} value {:?}", field, trimmed);
            None
        }
    }
}

/// Finite non-negative integer, from a number or numeric text
fn whole_number(field: &str, value: Option<&RawValue>) -> Option<u32> {
    let number = match value? {
        RawValue::Number(n) => Some(*n),
        RawValue::Text(s) if s.trim().is_empty() => return None,
        RawValue::Text(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    let accepted = number.filter(|n| {
        n.is_finite() && *n >= 0.0 && n.fract() == 0.0 && *n <= f64::from(u32::MAX)
    });

    if accepted.is_none() {
        debug!("ignoring malformed numeric bound {} = {:?}", field, value);
    }
    accepted.map(|n| n as u32)
}

/// Calendar date, from a date value or ISO text
fn date(field: &str, value: Option<&RawValue>) -> Option<NaiveDate> {
    match value? {
        RawValue::Date(d) => Some(*d),
        RawValue::Text(s) if s.trim().is_empty() => None,
        RawValue::Text(s) => match parse_date(s) {
            Ok(d) => Some(d),
            Err(e) => {
                debug!("ignoring {}: {}", field, e);
                None
            }
        },
        other => {
            debug!("ignoring {} value for date field {}", other.kind(), field);
            None
        }
    }
}

/// Only a real boolean constrains; anything else means "either"
fn tri_state(field: &str, value: Option<&RawValue>) -> Option<bool> {
    match value? {
        RawValue::Bool(b) => Some(*b),
        other => {
            debug!("ignoring {} value for tri-state field {}", other.kind(), field);
            None
        }
    }
}

//! Canonical filter specification

use chrono::NaiveDate;
use patient_cohort_types::{BloodGroup, Gender, PatientStatus};
use serde::{Deserialize, Serialize};

/// An inclusive range with optional ends.
///
/// A missing end is unbounded on that side. A range whose `from` exceeds its
/// `to` is empty: it admits nothing, not even a missing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<T>,
}

impl<T> Default for Bounds<T> {
    fn default() -> Self {
        Self { from: None, to: None }
    }
}

impl<T: PartialOrd + Copy> Bounds<T> {
    pub fn new(from: Option<T>, to: Option<T>) -> Self {
        Self { from, to }
    }

    pub fn between(from: T, to: T) -> Self {
        Self::new(Some(from), Some(to))
    }

    pub fn at_least(from: T) -> Self {
        Self::new(Some(from), None)
    }

    pub fn at_most(to: T) -> Self {
        Self::new(None, Some(to))
    }

    /// Whether either end constrains anything
    pub fn is_set(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Both ends present and inverted
    pub fn is_empty(&self) -> bool {
        matches!((self.from, self.to), (Some(from), Some(to)) if from > to)
    }

    /// Whether `value` lies within the range.
    ///
    /// An unset range admits everything, including a missing value. A set
    /// range never admits a missing value.
    pub fn admits(&self, value: Option<T>) -> bool {
        if !self.is_set() {
            return true;
        }
        if self.is_empty() {
            return false;
        }

        match value {
            None => false,
            Some(v) => {
                self.from.is_none_or(|from| v >= from) && self.to.is_none_or(|to| v <= to)
            }
        }
    }
}

/// One optional constraint per filterable attribute.
///
/// `Default` is the unconstrained spec. A `None`, an unset range, or a
/// blank text constraint never narrows the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    /// Matches full name, patient id, phone or email
    pub search: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub patient_id: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,

    pub status: Option<PatientStatus>,
    pub gender: Option<Gender>,
    pub blood_group: Option<BloodGroup>,
    pub insurance_type: Option<String>,

    pub age: Bounds<u32>,
    pub registration_date: Bounds<NaiveDate>,
    pub last_visit_date: Bounds<NaiveDate>,

    pub has_allergies: Option<bool>,
    pub has_chronic_diseases: Option<bool>,
    pub has_insurance: Option<bool>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field restricts the cohort
    pub fn is_unconstrained(&self) -> bool {
        let texts = [
            &self.search,
            &self.first_name,
            &self.last_name,
            &self.patient_id,
            &self.phone,
            &self.email,
            &self.insurance_type,
        ];

        texts
            .iter()
            .all(|text| text.as_deref().is_none_or(|t| t.trim().is_empty()))
            && self.status.is_none()
            && self.gender.is_none()
            && self.blood_group.is_none()
            && !self.age.is_set()
            && !self.registration_date.is_set()
            && !self.last_visit_date.is_set()
            && self.has_allergies.is_none()
            && self.has_chronic_diseases.is_none()
            && self.has_insurance.is_none()
    }

    /// True when some range constraint is inverted, so nothing can match
    pub fn has_empty_range(&self) -> bool {
        self.age.is_empty() || self.registration_date.is_empty() || self.last_visit_date.is_empty()
    }
}

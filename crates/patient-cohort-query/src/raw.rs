//! Raw search-form input
//!
//! Values bound to form controls arrive loosely typed: a number box may
//! hold `30` or `"30"`, a date picker may hold a date or an ISO string, a
//! checkbox may hold anything. [`RawValue`] captures that looseness so the
//! normalizer is the single place where it gets resolved.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single raw form-control value.
///
/// On the wire every string is [`RawValue::Text`], so text fields see
/// exactly what was typed; date fields parse it themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Date(NaiveDate),
}

impl RawValue {
    /// Short name of the variant, for log messages
    pub fn kind(&self) -> &'static str {
        match self {
            RawValue::Bool(_) => "bool",
            RawValue::Number(_) => "number",
            RawValue::Date(_) => "date",
            RawValue::Text(_) => "text",
        }
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<u32> for RawValue {
    fn from(value: u32) -> Self {
        RawValue::Number(f64::from(value))
    }
}

impl From<NaiveDate> for RawValue {
    fn from(value: NaiveDate) -> Self {
        RawValue::Date(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

/// Values of every search/filter form control, each possibly absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSearchInput {
    /// Quick search box
    pub search: Option<RawValue>,
    pub first_name: Option<RawValue>,
    pub last_name: Option<RawValue>,
    pub patient_id: Option<RawValue>,
    pub phone: Option<RawValue>,
    pub email: Option<RawValue>,
    pub status: Option<RawValue>,
    pub gender: Option<RawValue>,
    pub blood_group: Option<RawValue>,
    pub insurance_type: Option<RawValue>,
    pub age_from: Option<RawValue>,
    pub age_to: Option<RawValue>,
    pub registration_date_from: Option<RawValue>,
    pub registration_date_to: Option<RawValue>,
    pub last_visit_date_from: Option<RawValue>,
    pub last_visit_date_to: Option<RawValue>,
    pub has_allergies: Option<RawValue>,
    pub has_chronic_diseases: Option<RawValue>,
    pub has_insurance: Option<RawValue>,
}

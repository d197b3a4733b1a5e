//! Patient record as delivered by the data-fetch layer

use crate::demographics::{BloodGroup, Gender, PatientStatus};
use chrono::NaiveDate;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Insurance coverage attached to a patient
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceInfo {
    /// Whether the coverage is currently in force
    #[serde(default)]
    pub is_active: bool,
    /// Insurer name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Plan category (e.g. "private", "government")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_type: Option<String>,
}

impl InsuranceInfo {
    /// Active coverage with the given insurer
    pub fn active(provider: impl Into<String>) -> Self {
        Self {
            is_active: true,
            provider: Some(provider.into()),
            insurance_type: None,
        }
    }

    /// Set the plan category
    pub fn with_type(mut self, insurance_type: impl Into<String>) -> Self {
        self.insurance_type = Some(insurance_type.into());
        self
    }
}

/// A patient record, read-only input to the cohort pipeline.
///
/// `age` is supplied by the caller and is never recomputed from
/// `date_of_birth`; see [`crate::age_from_birth_date`] for the derivation
/// collaborators are expected to use.
///
/// Allergy and chronic-disease sets keep insertion order, which the
/// statistics ranking relies on for first-seen tie breaks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    pub id: String,
    pub patient_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    pub age: u32,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<BloodGroup>,
    pub status: PatientStatus,
    pub registration_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_visit_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub allergies: IndexSet<String>,
    #[serde(default)]
    pub chronic_diseases: IndexSet<String>,
    #[serde(default)]
    pub insurance: InsuranceInfo,
}

impl PatientRecord {
    /// Create a record with the required fields; every optional field is empty
    pub fn new(
        id: impl Into<String>,
        patient_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
        gender: Gender,
        registration_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            patient_id: patient_id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            middle_name: None,
            date_of_birth: None,
            age,
            gender,
            blood_group: None,
            status: PatientStatus::Active,
            registration_date,
            last_visit_date: None,
            phone: None,
            email: None,
            allergies: IndexSet::new(),
            chronic_diseases: IndexSet::new(),
            insurance: InsuranceInfo::default(),
        }
    }

    /// First, middle and last name joined by single spaces
    pub fn full_name(&self) -> String {
        [
            Some(self.first_name.as_str()),
            self.middle_name.as_deref(),
            Some(self.last_name.as_str()),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }

    pub fn has_allergies(&self) -> bool {
        !self.allergies.is_empty()
    }

    pub fn has_chronic_diseases(&self) -> bool {
        !self.chronic_diseases.is_empty()
    }

    /// Coverage counts only while it is active; a named provider alone does not
    pub fn has_insurance(&self) -> bool {
        self.insurance.is_active
    }

    pub fn with_status(mut self, status: PatientStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_blood_group(mut self, blood_group: BloodGroup) -> Self {
        self.blood_group = Some(blood_group);
        self
    }

    pub fn with_middle_name(mut self, middle_name: impl Into<String>) -> Self {
        self.middle_name = Some(middle_name.into());
        self
    }

    pub fn with_date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.date_of_birth = Some(date_of_birth);
        self
    }

    pub fn with_last_visit(mut self, date: NaiveDate) -> Self {
        self.last_visit_date = Some(date);
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_allergies<I, S>(mut self, allergies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allergies = allergies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_chronic_diseases<I, S>(mut self, diseases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.chronic_diseases = diseases.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_insurance(mut self, insurance: InsuranceInfo) -> Self {
        self.insurance = insurance;
        self
    }
}

//! Ordering of patient cohorts
//!
//! Sorting goes through typed extractors: each [`SortKey`] maps a record to
//! an optional [`SortValue`], and values of one kind compare by their
//! natural order (text case-sensitively, numbers numerically, dates
//! chronologically). Missing values go last in either direction.

use chrono::NaiveDate;
use log::trace;
use patient_cohort_types::{CohortError, PatientRecord};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sortable record attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    PatientId,
    FirstName,
    LastName,
    FullName,
    Age,
    Gender,
    Status,
    BloodGroup,
    RegistrationDate,
    LastVisitDate,
}

impl SortKey {
    pub const ALL: [SortKey; 10] = [
        SortKey::PatientId,
        SortKey::FirstName,
        SortKey::LastName,
        SortKey::FullName,
        SortKey::Age,
        SortKey::Gender,
        SortKey::Status,
        SortKey::BloodGroup,
        SortKey::RegistrationDate,
        SortKey::LastVisitDate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PatientId => "patientId",
            SortKey::FirstName => "firstName",
            SortKey::LastName => "lastName",
            SortKey::FullName => "fullName",
            SortKey::Age => "age",
            SortKey::Gender => "gender",
            SortKey::Status => "status",
            SortKey::BloodGroup => "bloodGroup",
            SortKey::RegistrationDate => "registrationDate",
            SortKey::LastVisitDate => "lastVisitDate",
        }
    }

    /// Extract this key's value from a record
    pub fn extract<'a>(&self, record: &'a PatientRecord) -> Option<SortValue<'a>> {
        match self {
            SortKey::PatientId => Some(SortValue::text(&record.patient_id)),
            SortKey::FirstName => Some(SortValue::text(&record.first_name)),
            SortKey::LastName => Some(SortValue::text(&record.last_name)),
            SortKey::FullName => Some(SortValue::Text(Cow::Owned(record.full_name()))),
            SortKey::Age => Some(SortValue::Number(i64::from(record.age))),
            SortKey::Gender => Some(SortValue::text(record.gender.as_str())),
            SortKey::Status => Some(SortValue::text(record.status.as_str())),
            SortKey::BloodGroup => record.blood_group.map(|group| SortValue::text(group.as_str())),
            SortKey::RegistrationDate => Some(SortValue::Date(record.registration_date)),
            SortKey::LastVisitDate => record.last_visit_date.map(SortValue::Date),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CohortError;

    /// Accepts camelCase (`lastVisitDate`) or snake_case (`last_visit_date`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str().to_ascii_lowercase() == wanted)
            .ok_or_else(|| CohortError::unknown_sort_key(s))
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Orient an ascending comparison result
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("asc"),
            SortDirection::Desc => f.write_str("desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = CohortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(CohortError::unknown_sort_direction(s)),
        }
    }
}

/// The single active sort of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec {
    pub key: SortKey,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn asc(key: SortKey) -> Self {
        Self::new(key, SortDirection::Asc)
    }

    pub fn desc(key: SortKey) -> Self {
        Self::new(key, SortDirection::Desc)
    }

    /// Parse a key name and a direction name
    pub fn parse(key: &str, direction: &str) -> patient_cohort_types::Result<Self> {
        Ok(Self::new(key.parse()?, direction.parse()?))
    }
}

/// A comparable value extracted from a record
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue<'a> {
    Text(Cow<'a, str>),
    Number(i64),
    Date(NaiveDate),
}

impl<'a> SortValue<'a> {
    pub fn text(value: &'a str) -> Self {
        SortValue::Text(Cow::Borrowed(value))
    }
}

/// Compare two extracted values: present values by `direction`, missing last
fn compare_values(
    a: Option<&SortValue<'_>>,
    b: Option<&SortValue<'_>>,
    direction: SortDirection,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => direction.apply(a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Comparator over records for one key and direction.
///
/// `Desc` is `Asc` reversed for every pair of present values. Records
/// missing the key compare greater than any record that has it, whatever
/// the direction.
pub fn make_comparator(
    key: SortKey,
    direction: SortDirection,
) -> impl Fn(&PatientRecord, &PatientRecord) -> Ordering {
    move |a: &PatientRecord, b: &PatientRecord| {
        compare_values(key.extract(a).as_ref(), key.extract(b).as_ref(), direction)
    }
}

/// Stable sort of record references.
///
/// Equal keys keep their input order. Keys are extracted once per record.
pub fn sort_cohort<'a, I>(records: I, spec: &SortSpec) -> Vec<&'a PatientRecord>
where
    I: IntoIterator<Item = &'a PatientRecord>,
{
    let mut keyed: Vec<(Option<SortValue<'a>>, &'a PatientRecord)> = records
        .into_iter()
        .map(|record| (spec.key.extract(record), record))
        .collect();

    // Vec::sort_by is stable
    keyed.sort_by(|(k1, _), (k2, _)| compare_values(k1.as_ref(), k2.as_ref(), spec.direction));

    trace!("sort_cohort ordered {} records by {} {}", keyed.len(), spec.key, spec.direction);
    keyed.into_iter().map(|(_, record)| record).collect()
}

//! Aggregator output types

use indexmap::IndexMap;
use patient_cohort_types::{Gender, PatientStatus};
use serde::{Deserialize, Serialize};

/// Lower bound of the adult band
pub const ADULT_MIN_AGE: u32 = 18;

/// Lower bound of the senior band
pub const SENIOR_MIN_AGE: u32 = 65;

/// Fixed age partition: under 18, 18 to 64, 65 and over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeBand {
    Pediatric,
    Adult,
    Senior,
}

impl AgeBand {
    pub fn of(age: u32) -> Self {
        if age < ADULT_MIN_AGE {
            AgeBand::Pediatric
        } else if age < SENIOR_MIN_AGE {
            AgeBand::Adult
        } else {
            AgeBand::Senior
        }
    }
}

/// Record counts per age band
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBands {
    pub pediatric: usize,
    pub adult: usize,
    pub senior: usize,
}

impl AgeBands {
    pub fn add(&mut self, band: AgeBand) {
        match band {
            AgeBand::Pediatric => self.pediatric += 1,
            AgeBand::Adult => self.adult += 1,
            AgeBand::Senior => self.senior += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.pediatric + self.adult + self.senior
    }
}

/// A category's count and its percentage of the cohort
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Share {
    pub count: usize,
    pub percent: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GenderDistribution {
    pub male: Share,
    pub female: Share,
    pub other: Share,
}

impl GenderDistribution {
    pub fn get(&self, gender: Gender) -> Share {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
            Gender::Other => self.other,
        }
    }
}

/// Split by whether coverage is active
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InsuranceDistribution {
    pub insured: Share,
    pub uninsured: Share,
}

/// A ranked free-text tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedLabel {
    pub label: String,
    pub count: usize,
    /// Share of the cohort's records carrying the tag
    pub percent: f64,
}

/// Derived cohort statistics for dashboards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSnapshot {
    pub total_count: usize,
    pub new_in_current_period: usize,
    pub new_in_previous_period: usize,
    /// Signed, unrounded change between the two periods; 0 when the previous
    /// one is empty
    pub growth_rate_percent: f64,
    pub age_bands: AgeBands,
    pub average_age: f64,
    pub gender_distribution: GenderDistribution,
    pub insurance_distribution: InsuranceDistribution,
    /// Every status, in declaration order
    pub status_distribution: IndexMap<PatientStatus, Share>,
    pub top_conditions: Vec<RankedLabel>,
    pub top_allergies: Vec<RankedLabel>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, AgeBand::Pediatric)]
    #[case(17, AgeBand::Pediatric)]
    #[case(18, AgeBand::Adult)]
    #[case(64, AgeBand::Adult)]
    #[case(65, AgeBand::Senior)]
    #[case(120, AgeBand::Senior)]
    fn test_age_band_boundaries(#[case] age: u32, #[case] expected: AgeBand) {
        assert_eq!(AgeBand::of(age), expected);
    }
}

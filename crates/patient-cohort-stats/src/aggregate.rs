//! Cohort aggregation
//!
//! Computes a [`StatisticsSnapshot`] in one pass over the records plus the
//! two tag rankings. Rates and percentages are guarded against an empty
//! denominator. Distribution percentages are rounded to one decimal place;
//! the growth rate is exact.

use crate::options::AggregateOptions;
use crate::ranking::rank_tags;
use crate::snapshot::{
    AgeBand, AgeBands, GenderDistribution, InsuranceDistribution, Share, StatisticsSnapshot,
};
use chrono::{Days, NaiveDate};
use indexmap::IndexMap;
use log::trace;
use patient_cohort_types::{Gender, PatientRecord, PatientStatus};

/// Aggregate `records` with the given options
pub fn aggregate<'a, I>(records: I, options: &AggregateOptions) -> StatisticsSnapshot
where
    I: IntoIterator<Item = &'a PatientRecord>,
{
    let records: Vec<&PatientRecord> = records.into_iter().collect();
    let total = records.len();

    let windows = Windows::new(options.as_of, options.period_length_days.max(1));
    let mut current = 0;
    let mut previous = 0;
    let mut age_bands = AgeBands::default();
    let mut age_sum: u64 = 0;
    let mut genders = [0usize; 3];
    let mut insured = 0;
    let mut statuses: IndexMap<PatientStatus, usize> =
        PatientStatus::ALL.into_iter().map(|status| (status, 0)).collect();

    for record in &records {
        match windows.classify(record.registration_date) {
            Some(Period::Current) => current += 1,
            Some(Period::Previous) => previous += 1,
            None => {}
        }

        age_bands.add(AgeBand::of(record.age));
        age_sum += u64::from(record.age);

        genders[gender_index(record.gender)] += 1;
        if record.has_insurance() {
            insured += 1;
        }
        *statuses.entry(record.status).or_insert(0) += 1;
    }

    let share = |count: usize| Share {
        count,
        percent: percent_of(count, total),
    };

    let snapshot = StatisticsSnapshot {
        total_count: total,
        new_in_current_period: current,
        new_in_previous_period: previous,
        growth_rate_percent: growth_rate_percent(current, previous),
        age_bands,
        average_age: if total == 0 {
            0.0
        } else {
            round_tenth(age_sum as f64 / total as f64)
        },
        gender_distribution: GenderDistribution {
            male: share(genders[gender_index(Gender::Male)]),
            female: share(genders[gender_index(Gender::Female)]),
            other: share(genders[gender_index(Gender::Other)]),
        },
        insurance_distribution: InsuranceDistribution {
            insured: share(insured),
            uninsured: share(total - insured),
        },
        status_distribution: statuses
            .into_iter()
            .map(|(status, count)| (status, share(count)))
            .collect(),
        top_conditions: rank_tags(
            records.iter().map(|r| r.chronic_diseases.iter().map(String::as_str)),
            total,
            options.top_n,
        ),
        top_allergies: rank_tags(
            records.iter().map(|r| r.allergies.iter().map(String::as_str)),
            total,
            options.top_n,
        ),
    };

    trace!(
        "aggregated {} records as of {}: {} new vs {} previous",
        total, options.as_of, current, previous
    );
    snapshot
}

/// Aggregate with the default period length and ranking size
pub fn aggregate_as_of<'a, I>(records: I, as_of: NaiveDate) -> StatisticsSnapshot
where
    I: IntoIterator<Item = &'a PatientRecord>,
{
    aggregate(records, &AggregateOptions::new(as_of))
}

/// Percentage change from `previous` to `current`; 0 when `previous` is 0
pub fn growth_rate_percent(current: usize, previous: usize) -> f64 {
    if previous == 0 {
        return 0.0;
    }
    (current as f64 - previous as f64) / previous as f64 * 100.0
}

/// `count` as a percentage of `total`; 0 when `total` is 0
pub fn percent_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_tenth(count as f64 / total as f64 * 100.0)
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn gender_index(gender: Gender) -> usize {
    match gender {
        Gender::Male => 0,
        Gender::Female => 1,
        Gender::Other => 2,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Period {
    Current,
    Previous,
}

/// The two adjacent registration windows ending at `as_of`.
///
/// Current is `[as_of - P, as_of]`, previous is `[as_of - 2P, as_of - P)`.
/// Window starts saturate at the earliest representable date.
struct Windows {
    as_of: NaiveDate,
    current_start: NaiveDate,
    previous_start: NaiveDate,
}

impl Windows {
    fn new(as_of: NaiveDate, period_length_days: u32) -> Self {
        let period = Days::new(u64::from(period_length_days));
        let current_start = as_of.checked_sub_days(period).unwrap_or(NaiveDate::MIN);
        let previous_start = current_start.checked_sub_days(period).unwrap_or(NaiveDate::MIN);
        Self {
            as_of,
            current_start,
            previous_start,
        }
    }

    fn classify(&self, date: NaiveDate) -> Option<Period> {
        if date > self.as_of {
            None
        } else if date >= self.current_start {
            Some(Period::Current)
        } else if date >= self.previous_start {
            Some(Period::Previous)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(5, 0, 0.0)]
    #[case(0, 0, 0.0)]
    #[case(10, 5, 100.0)]
    #[case(5, 10, -50.0)]
    #[case(7, 7, 0.0)]
    fn test_growth_rate(#[case] current: usize, #[case] previous: usize, #[case] expected: f64) {
        assert_eq!(growth_rate_percent(current, previous), expected);
    }

    #[rstest]
    #[case(4, 3, 100.0 / 3.0)]
    #[case(2, 3, -100.0 / 3.0)]
    #[case(1, 3, -200.0 / 3.0)]
    fn test_growth_rate_is_not_rounded(
        #[case] current: usize,
        #[case] previous: usize,
        #[case] expected: f64,
    ) {
        let growth = growth_rate_percent(current, previous);
        assert!((growth - expected).abs() < 1e-9, "{growth} != {expected}");
        assert_ne!(growth, round_tenth(growth));
    }

    #[rstest]
    #[case(0, 0, 0.0)]
    #[case(1, 3, 33.3)]
    #[case(2, 3, 66.7)]
    #[case(3, 3, 100.0)]
    fn test_percent_of(#[case] count: usize, #[case] total: usize, #[case] expected: f64) {
        assert_eq!(percent_of(count, total), expected);
    }

    #[test]
    fn test_window_edges() {
        let windows = Windows::new(date(2024, 6, 30), 30);

        assert_eq!(windows.classify(date(2024, 6, 30)), Some(Period::Current));
        assert_eq!(windows.classify(date(2024, 5, 31)), Some(Period::Current));
        assert_eq!(windows.classify(date(2024, 5, 30)), Some(Period::Previous));
        assert_eq!(windows.classify(date(2024, 5, 1)), Some(Period::Previous));
        assert_eq!(windows.classify(date(2024, 4, 30)), None);
        assert_eq!(windows.classify(date(2024, 7, 1)), None);
    }

    #[test]
    fn test_huge_period_saturates() {
        let windows = Windows::new(date(2024, 6, 30), u32::MAX);
        assert_eq!(windows.classify(date(1900, 1, 1)), Some(Period::Current));
    }
}

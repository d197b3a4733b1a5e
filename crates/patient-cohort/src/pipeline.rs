//! Filter-then-sort pipeline over a loaded cohort

use log::debug;
use patient_cohort_query::{
    FilterSpec, RawSearchInput, SortSpec, filter_cohort, normalize, sort_cohort,
};
use patient_cohort_stats::{AggregateOptions, StatisticsSnapshot, aggregate};
use patient_cohort_types::PatientRecord;

/// A normalized filter plus an optional sort
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CohortQuery {
    pub filter: FilterSpec,
    pub sort: Option<SortSpec>,
}

impl CohortQuery {
    pub fn new(filter: FilterSpec, sort: Option<SortSpec>) -> Self {
        Self { filter, sort }
    }

    /// Normalize raw form input into a query
    pub fn from_raw(raw: &RawSearchInput, sort: Option<SortSpec>) -> Self {
        Self::new(normalize(raw), sort)
    }

    /// Records matching the filter, sorted when a sort is set and in input
    /// order otherwise
    pub fn run<'a>(&self, records: &'a [PatientRecord]) -> Vec<&'a PatientRecord> {
        let matched = filter_cohort(records, &self.filter);
        debug!("query matched {} of {} records", matched.len(), records.len());
        match &self.sort {
            Some(sort) => sort_cohort(matched, sort),
            None => matched,
        }
    }
}

/// Dashboard statistics over `records`
pub fn cohort_statistics<'a, I>(records: I, options: &AggregateOptions) -> StatisticsSnapshot
where
    I: IntoIterator<Item = &'a PatientRecord>,
{
    aggregate(records, options)
}

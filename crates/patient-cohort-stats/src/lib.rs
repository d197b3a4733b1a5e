//! Patient cohort statistics
//!
//! Dashboard figures derived from a cohort:
//!
//! - **Growth**: new registrations in the current period against the
//!   previous one of equal length
//! - **Age bands**: pediatric (under 18), adult (18 to 64), senior (65+)
//! - **Distributions**: gender, insurance and status as count plus percent
//! - **Rankings**: top-N chronic conditions and allergies
//!
//! Aggregation is pure: the reference date comes from [`AggregateOptions`],
//! never from the clock, unless the caller builds the options with
//! [`AggregateOptions::today`].

pub mod aggregate;
pub mod options;
pub mod ranking;
pub mod snapshot;

pub use aggregate::{aggregate, aggregate_as_of, growth_rate_percent, percent_of};
pub use options::{AggregateOptions, DEFAULT_PERIOD_LENGTH_DAYS, DEFAULT_TOP_N};
pub use ranking::rank_tags;
pub use snapshot::{
    AgeBand, AgeBands, GenderDistribution, InsuranceDistribution, RankedLabel, Share,
    StatisticsSnapshot,
};

//! Aggregation parameters

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Default growth-rate window, in days
pub const DEFAULT_PERIOD_LENGTH_DAYS: u32 = 30;

/// Default length of the tag rankings
pub const DEFAULT_TOP_N: usize = 5;

/// Parameters for one aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateOptions {
    /// Reference day; the current period ends on it, inclusive
    pub as_of: NaiveDate,
    /// Length of each of the two compared periods
    #[serde(default = "default_period_length_days")]
    pub period_length_days: u32,
    /// Maximum entries per ranking
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_period_length_days() -> u32 {
    DEFAULT_PERIOD_LENGTH_DAYS
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

impl AggregateOptions {
    pub fn new(as_of: NaiveDate) -> Self {
        Self {
            as_of,
            period_length_days: DEFAULT_PERIOD_LENGTH_DAYS,
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Options anchored on the local calendar day
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    /// Set the period length; zero is raised to one day
    pub fn with_period_length_days(mut self, days: u32) -> Self {
        self.period_length_days = days.max(1);
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}

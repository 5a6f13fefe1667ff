use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::{Date, Month};

use crate::models::{common::years_before, member::Member};

use super::chart::{ChartData, Dataset, TableData};

pub const LEAVERS_LABEL: &str = "Leavers";
pub const STARTERS_LABEL: &str = "Starters";
pub const LEAVERS_COLOR: &str = "#F87171";
pub const STARTERS_COLOR: &str = "#2DD4BF";

#[derive(Debug, Default, Deserialize)]
pub struct StartersLeaversParams {
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

/// One calendar month of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bucket {
    pub year: i32,
    pub month: Month,
}

impl Bucket {
    pub fn of(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn next(self) -> Self {
        let year = if self.month == Month::December {
            self.year + 1
        } else {
            self.year
        };
        Self {
            year,
            month: self.month.next(),
        }
    }

    /// "February 2023"
    pub fn label(&self) -> String {
        format!("{} {}", self.month, self.year)
    }
}

/// Months from `start`'s through `end`'s, inclusive. Empty when `start > end`.
pub fn month_buckets(start: Date, end: Date) -> Vec<Bucket> {
    if start > end {
        return Vec::new();
    }
    let last = Bucket::of(end);
    let mut current = Bucket::of(start);
    let mut buckets = vec![current];
    while current != last {
        current = current.next();
        buckets.push(current);
    }
    buckets
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StartersLeaversCounts {
    pub leavers_count: u32,
    pub starters_count: u32,
}

/// Hires and terminations per month between two dates.
#[derive(Debug, Clone)]
pub struct StartersLeaversReport {
    pub start_date: Date,
    pub end_date: Date,
    buckets: Vec<Bucket>,
    leavers: Vec<u32>,
    starters: Vec<u32>,
}

impl StartersLeaversReport {
    /// `start_date` defaults to a year before `today`, `end_date` to `today`.
    pub fn new(members: &[Member], params: StartersLeaversParams, today: Date) -> Self {
        let start_date = params.start_date.unwrap_or_else(|| years_before(today, 1));
        let end_date = params.end_date.unwrap_or(today);
        let buckets = month_buckets(start_date, end_date);

        let leavers = count_by_bucket(
            &buckets,
            members
                .iter()
                .filter(|m| m.is_leaver_between(start_date, end_date))
                .filter_map(|m| m.termination_date),
        );
        let starters = count_by_bucket(
            &buckets,
            members
                .iter()
                .filter(|m| m.is_starter_between(start_date, end_date))
                .filter_map(|m| m.hire_date),
        );

        Self {
            start_date,
            end_date,
            buckets,
            leavers,
            starters,
        }
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn labels(&self) -> Vec<String> {
        self.buckets.iter().map(Bucket::label).collect()
    }

    pub fn to_chart_data(&self) -> ChartData<u32> {
        ChartData {
            labels: self.labels(),
            datasets: vec![
                Dataset::new(LEAVERS_LABEL, self.leavers.clone(), LEAVERS_COLOR),
                Dataset::new(STARTERS_LABEL, self.starters.clone(), STARTERS_COLOR),
            ],
        }
    }

    pub fn to_table_data(&self) -> TableData<StartersLeaversCounts> {
        let rows = self
            .labels()
            .into_iter()
            .zip(self.leavers.iter().zip(&self.starters))
            .map(|(label, (&leavers_count, &starters_count))| {
                (
                    label,
                    StartersLeaversCounts {
                        leavers_count,
                        starters_count,
                    },
                )
            })
            .collect();
        TableData::new(rows)
    }
}

fn count_by_bucket(buckets: &[Bucket], dates: impl Iterator<Item = Date>) -> Vec<u32> {
    let index: HashMap<Bucket, usize> = buckets.iter().enumerate().map(|(i, b)| (*b, i)).collect();
    let mut counts = vec![0; buckets.len()];
    for date in dates {
        // Dates outside the bucket range are skipped
        if let Some(&i) = index.get(&Bucket::of(date)) {
            counts[i] += 1;
        }
    }
    counts
}

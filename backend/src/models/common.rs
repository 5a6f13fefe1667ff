use serde::Serialize;
use time::{Date, Duration, Month};

/// Inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

impl DateRange {
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// First through last day of the given calendar month.
    pub fn month(year: i32, month: Month) -> Result<Self, time::error::ComponentRange> {
        let start = Date::from_calendar_date(year, month, 1)?;
        let end = Date::from_calendar_date(year, month, time::util::days_in_year_month(year, month))?;
        Ok(Self { start, end })
    }

    pub fn overlaps(&self, start: Date, end: Date) -> bool {
        start <= self.end && end >= self.start
    }
}

/// Same calendar day `years` earlier; Feb 29 lands on Feb 28.
pub fn years_before(date: Date, years: i32) -> Date {
    let year = date.year() - years;
    date.replace_year(year).unwrap_or_else(|_| {
        Date::from_calendar_date(year, date.month(), 28).unwrap_or(date)
    })
}

pub fn weeks_after(date: Date, weeks: i64) -> Date {
    date.saturating_add(Duration::weeks(weeks))
}

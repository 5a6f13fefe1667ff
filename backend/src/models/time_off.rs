use serde::{Deserialize, Serialize};
use sqlx::{Postgres, QueryBuilder};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use super::common::{weeks_after, DateRange};

/// How far ahead "upcoming" looks.
pub const UPCOMING_WEEKS: i64 = 2;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "time_off_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TimeOffStatus {
    Pending,
    Approved,
    Rejected,
}

impl TimeOffStatus {
    pub const PENDING_OR_APPROVED: [TimeOffStatus; 2] =
        [TimeOffStatus::Pending, TimeOffStatus::Approved];

    pub fn is_pending_or_approved(&self) -> bool {
        matches!(self, TimeOffStatus::Pending | TimeOffStatus::Approved)
    }
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct TimeOff {
    pub id: Uuid,
    pub member_id: Uuid,
    pub start_date: Date,
    pub end_date: Date,
    pub status: TimeOffStatus,
    pub approver_ids: Vec<Uuid>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl TimeOff {
    pub fn is_current(&self, today: Date) -> bool {
        self.start_date <= today && today <= self.end_date
    }

    pub fn is_upcoming(&self, today: Date) -> bool {
        today < self.start_date && self.start_date < weeks_after(today, UPCOMING_WEEKS)
    }

    pub fn is_current_or_upcoming(&self, today: Date) -> bool {
        self.end_date >= today
    }

    pub fn is_within(&self, range: &DateRange) -> bool {
        range.overlaps(self.start_date, self.end_date)
    }
}

/// Time-off listing scopes exposed by `GET /api/time-offs`.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimeOffScope {
    Current,
    Upcoming,
    #[default]
    CurrentOrUpcoming,
}

impl TimeOffScope {
    pub fn matches(&self, time_off: &TimeOff, today: Date) -> bool {
        match self {
            TimeOffScope::Current => time_off.is_current(today),
            TimeOffScope::Upcoming => time_off.is_upcoming(today),
            TimeOffScope::CurrentOrUpcoming => time_off.is_current_or_upcoming(today),
        }
    }

    /// Appends the scope's condition on the `t` alias.
    pub fn push_condition(&self, qb: &mut QueryBuilder<'_, Postgres>, today: Date) {
        match self {
            TimeOffScope::Current => {
                qb.push("(t.start_date <= ")
                    .push_bind(today)
                    .push(" AND t.end_date >= ")
                    .push_bind(today)
                    .push(")");
            }
            TimeOffScope::Upcoming => {
                qb.push("(t.start_date > ")
                    .push_bind(today)
                    .push(" AND t.start_date < ")
                    .push_bind(weeks_after(today, UPCOMING_WEEKS))
                    .push(")");
            }
            TimeOffScope::CurrentOrUpcoming => {
                qb.push("t.end_date >= ").push_bind(today);
            }
        }
    }
}

/// Time-off with the requesting member's name, ordered by start date.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct TimeOffEntry {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub time_off: TimeOff,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Deserialize)]
pub struct TimeOffListParams {
    #[serde(default)]
    pub scope: TimeOffScope,
}

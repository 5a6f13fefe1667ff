use serde::Deserialize;
use time::{Date, Month};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::{common::DateRange, time_off::TimeOffStatus};

use super::scope::{Criterion, MemberScope};

/// Raw query parameters of the time-off calendar.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct TimeOffSearchParams {
    pub status: Option<String>,
    pub team_id: Option<Uuid>,
    pub project_id: Option<Uuid>,
    #[validate(range(min = 1900, max = 9999))]
    pub year: Option<i32>,
    #[validate(range(min = 1, max = 12))]
    pub month: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeOffSearchStatus {
    /// Pending or approved time-off overlapping the selected month.
    WithTimeOff,
    /// Holds a contract active today.
    Current,
    /// Unrecognised value; matches nobody.
    Unknown(String),
}

impl TimeOffSearchStatus {
    pub fn parse(value: &str) -> Self {
        match value {
            "with_time_off" => Self::WithTimeOff,
            "current" => Self::Current,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Validated time-off calendar search, defaults resolved against `today`.
#[derive(Debug, Clone)]
pub struct TimeOffSearch {
    pub status: TimeOffSearchStatus,
    pub team_id: Option<Uuid>,
    pub project_id: Option<Uuid>,
    pub year: i32,
    pub month: Month,
    today: Date,
    window: DateRange,
}

impl TimeOffSearch {
    pub fn new(params: TimeOffSearchParams, today: Date) -> Result<Self> {
        params.validate()?;

        let status = match params.status.as_deref().map(str::trim) {
            None | Some("") => TimeOffSearchStatus::WithTimeOff,
            Some(value) => TimeOffSearchStatus::parse(value),
        };
        let year = params.year.unwrap_or_else(|| today.year());
        let month = match params.month {
            Some(m) => Month::try_from(m)
                .map_err(|_| AppError::BadRequest(format!("invalid month: {}", m)))?,
            None => today.month(),
        };
        let window = DateRange::month(year, month)
            .map_err(|e| AppError::BadRequest(format!("invalid year/month: {}", e)))?;

        Ok(Self {
            status,
            team_id: params.team_id,
            project_id: params.project_id,
            year,
            month,
            today,
            window,
        })
    }

    /// The calendar month time-offs must overlap.
    pub fn window(&self) -> DateRange {
        self.window
    }

    pub fn call<S: MemberScope>(&self, members: S) -> S {
        let mut query = self.reduce_by_status(members);
        if let Some(team_id) = self.team_id {
            query = query.narrow(Criterion::InTeam(team_id));
        }
        if let Some(project_id) = self.project_id {
            query = query.narrow(Criterion::InProject(project_id));
        }
        query
    }

    fn reduce_by_status<S: MemberScope>(&self, members: S) -> S {
        match &self.status {
            TimeOffSearchStatus::WithTimeOff => members
                .narrow(Criterion::TimeOffWithin {
                    range: self.window,
                    statuses: TimeOffStatus::PENDING_OR_APPROVED.to_vec(),
                })
                .distinct(),
            TimeOffSearchStatus::Current => members
                .narrow(Criterion::ActiveContractOn(self.today))
                .distinct(),
            TimeOffSearchStatus::Unknown(value) => {
                tracing::debug!(status = %value, "Unknown time-off search status");
                members.none()
            }
        }
    }
}

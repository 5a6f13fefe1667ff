use serde::{Deserialize, Serialize};
use time::{Date, Month, OffsetDateTime};
use uuid::Uuid;

use crate::auth::Role;

use super::{contract::Contract, time_off::TimeOff};

pub const DEFAULT_LOCALE: &str = "en";

/// Employee record as stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Member {
    pub id: Uuid,
    pub company_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub locale: String,
    pub date_of_birth: Option<Date>,
    pub hire_date: Option<Date>,
    pub termination_date: Option<Date>,
    pub profile_filled: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Member {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn locale(&self) -> &str {
        if self.locale.is_empty() {
            DEFAULT_LOCALE
        } else {
            &self.locale
        }
    }

    pub fn is_starter_between(&self, start: Date, end: Date) -> bool {
        self.hire_date.is_some_and(|d| start <= d && d <= end)
    }

    pub fn is_leaver_between(&self, start: Date, end: Date) -> bool {
        self.termination_date.is_some_and(|d| start <= d && d <= end)
    }

    fn birthday_in(&self, year: i32) -> Option<Date> {
        let dob = self.date_of_birth?;
        dob.replace_year(year)
            .or_else(|_| Date::from_calendar_date(year, Month::February, 28))
            .ok()
    }

    pub fn birthday_today(&self, today: Date) -> Option<bool> {
        Some(self.birthday_in(today.year())? == today)
    }

    pub fn birthday_passed(&self, today: Date) -> Option<bool> {
        Some(today > self.birthday_in(today.year())?)
    }

    pub fn birthday_will_be(&self, today: Date) -> Option<bool> {
        Some(today < self.birthday_in(today.year())?)
    }

    pub fn days_until_birthday(&self, today: Date) -> Option<i64> {
        let next = if self.birthday_passed(today)? {
            self.birthday_in(today.year() + 1)?
        } else {
            self.birthday_in(today.year())?
        };
        Some((next - today).whole_days())
    }
}

/// A member together with the relations the search layer narrows on.
#[derive(Debug, Clone)]
pub struct MemberRecord {
    pub member: Member,
    pub contracts: Vec<Contract>,
    pub team_ids: Vec<Uuid>,
    pub project_ids: Vec<Uuid>,
    pub time_offs: Vec<TimeOff>,
}

impl MemberRecord {
    pub fn new(member: Member) -> Self {
        Self {
            member,
            contracts: Vec::new(),
            team_ids: Vec::new(),
            project_ids: Vec::new(),
            time_offs: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.member.id
    }

    pub fn current_contract(&self, today: Date) -> Option<&Contract> {
        super::contract::current_contract(&self.contracts, today)
    }

    pub fn salary(&self, today: Date) -> f64 {
        super::contract::salary(&self.contracts, today)
    }
}

/// What `GET /api/members/me` returns.
#[derive(Debug, Clone, Serialize)]
pub struct MemberProfile {
    #[serde(flatten)]
    pub member: Member,
    pub full_name: String,
    pub salary: f64,
    pub days_until_birthday: Option<i64>,
    pub birthday_today: Option<bool>,
}

impl MemberProfile {
    pub fn build(member: Member, contracts: &[Contract], today: Date) -> Self {
        Self {
            full_name: member.full_name(),
            salary: super::contract::salary(contracts, today),
            days_until_birthday: member.days_until_birthday(today),
            birthday_today: member.birthday_today(today),
            member,
        }
    }
}

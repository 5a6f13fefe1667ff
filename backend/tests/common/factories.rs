use std::collections::HashSet;

use staffbook_backend::{
    auth::Role,
    models::{
        contract::Contract,
        member::{Member, MemberRecord},
        team::{Team, TeamVisibility},
        time_off::{TimeOff, TimeOffStatus},
    },
    policies::Actor,
};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

pub fn member(company_id: Uuid, first_name: &str, last_name: &str) -> Member {
    Member {
        id: Uuid::new_v4(),
        company_id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!(
            "{}.{}@example.test",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        role: Role::Employee,
        locale: "en".to_string(),
        date_of_birth: None,
        hire_date: None,
        termination_date: None,
        profile_filled: true,
        created_at: OffsetDateTime::UNIX_EPOCH,
    }
}

pub fn record(member: Member) -> MemberRecord {
    MemberRecord::new(member)
}

pub fn contract(member_id: Uuid, start_date: Date, end_date: Option<Date>, amount: Option<f64>) -> Contract {
    Contract {
        id: Uuid::new_v4(),
        member_id,
        start_date,
        end_date,
        gross_salary_amount: amount,
    }
}

pub fn time_off(member_id: Uuid, start_date: Date, end_date: Date, status: TimeOffStatus) -> TimeOff {
    TimeOff {
        id: Uuid::new_v4(),
        member_id,
        start_date,
        end_date,
        status,
        approver_ids: vec![Uuid::new_v4(), Uuid::new_v4()],
        created_at: OffsetDateTime::UNIX_EPOCH,
    }
}

pub fn team(company_id: Uuid, title: &str, visibility: TeamVisibility) -> Team {
    Team {
        id: Uuid::new_v4(),
        company_id,
        title: title.to_string(),
        visibility,
        created_at: OffsetDateTime::UNIX_EPOCH,
    }
}

pub fn actor(company_id: Uuid, role: Role, team_ids: &[Uuid]) -> Actor {
    Actor {
        id: Uuid::new_v4(),
        company_id,
        role,
        team_ids: team_ids.iter().copied().collect::<HashSet<_>>(),
    }
}

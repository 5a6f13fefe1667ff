//! Authorization predicates. Every check fails closed across companies.

pub mod company;
pub mod team;

use std::collections::HashSet;

use uuid::Uuid;

use crate::auth::Role;

pub use company::CompanyPolicy;
pub use team::TeamPolicy;

/// The member an authorization question is asked about.
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: Uuid,
    pub company_id: Uuid,
    pub role: Role,
    pub team_ids: HashSet<Uuid>,
}

impl Actor {
    pub fn is_manager(&self) -> bool {
        self.role.is_manager()
    }

    pub fn belongs_to_team(&self, team_id: Uuid) -> bool {
        self.team_ids.contains(&team_id)
    }

    pub fn same_company(&self, company_id: Uuid) -> bool {
        self.company_id == company_id
    }
}

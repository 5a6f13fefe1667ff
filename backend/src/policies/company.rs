use uuid::Uuid;

use super::Actor;

/// Company-wide permissions: reports and the member directory.
pub struct CompanyPolicy<'a> {
    actor: &'a Actor,
    company_id: Uuid,
}

impl<'a> CompanyPolicy<'a> {
    pub fn new(actor: &'a Actor, company_id: Uuid) -> Self {
        Self { actor, company_id }
    }

    pub fn list_members(&self) -> bool {
        self.actor.same_company(self.company_id)
    }

    pub fn manage_reports(&self) -> bool {
        self.actor.same_company(self.company_id) && self.actor.is_manager()
    }

    pub fn manage_financial_reports(&self) -> bool {
        self.manage_reports()
    }
}

use serde::Serialize;
use time::Date;
use uuid::Uuid;

/// Employment agreement; `end_date = None` means open-ended.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Contract {
    pub id: Uuid,
    pub member_id: Uuid,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub gross_salary_amount: Option<f64>,
}

impl Contract {
    pub fn is_active_on(&self, date: Date) -> bool {
        self.start_date <= date && self.end_date.map_or(true, |end| date <= end)
    }
}

/// The contract covering `today`. Overlapping contracts resolve to the latest start.
pub fn current_contract(contracts: &[Contract], today: Date) -> Option<&Contract> {
    contracts
        .iter()
        .filter(|c| c.is_active_on(today))
        .max_by_key(|c| c.start_date)
}

pub fn salary(contracts: &[Contract], today: Date) -> f64 {
    current_contract(contracts, today)
        .and_then(|c| c.gross_salary_amount)
        .unwrap_or(0.0)
}

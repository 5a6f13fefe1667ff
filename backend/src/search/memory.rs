use std::collections::HashSet;

use uuid::Uuid;

use crate::models::member::MemberRecord;

use super::scope::{Criterion, MemberScope};

/// Eagerly evaluated member collection.
#[derive(Debug, Clone, Default)]
pub struct MemberSet {
    records: Vec<MemberRecord>,
}

impl MemberSet {
    pub fn new(records: Vec<MemberRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, member_id: Uuid) -> bool {
        self.records.iter().any(|r| r.id() == member_id)
    }

    pub fn ids(&self) -> Vec<Uuid> {
        self.records.iter().map(MemberRecord::id).collect()
    }

    pub fn records(&self) -> &[MemberRecord] {
        &self.records
    }
}

impl MemberScope for MemberSet {
    fn narrow(mut self, criterion: Criterion) -> Self {
        self.records.retain(|record| matches(&criterion, record));
        self
    }

    fn distinct(mut self) -> Self {
        let mut seen = HashSet::new();
        self.records.retain(|record| seen.insert(record.id()));
        self
    }

    fn none(mut self) -> Self {
        self.records.clear();
        self
    }
}

fn matches(criterion: &Criterion, record: &MemberRecord) -> bool {
    match criterion {
        Criterion::InTeam(team_id) => record.team_ids.contains(team_id),
        Criterion::InProject(project_id) => record.project_ids.contains(project_id),
        Criterion::TimeOffWithin { range, statuses } => record
            .time_offs
            .iter()
            .any(|t| statuses.contains(&t.status) && t.is_within(range)),
        Criterion::ActiveContractOn(date) => record.contracts.iter().any(|c| c.is_active_on(*date)),
        Criterion::TerminatedOnOrBefore(date) => record
            .member
            .termination_date
            .is_some_and(|d| d <= *date),
        Criterion::NameContains(needle) => record
            .member
            .full_name()
            .to_lowercase()
            .contains(&needle.to_lowercase()),
    }
}

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::models::member::Member;

use super::scope::{Criterion, MemberScope};

pub const MEMBER_COLUMNS: &str = "m.id, m.company_id, m.first_name, m.last_name, m.email, m.role, \
     m.locale, m.date_of_birth, m.hire_date, m.termination_date, m.profile_filled, m.created_at";

/// Lazily composed query over one company's members, ordered by full name.
/// Nothing touches the database until [`PgMemberQuery::fetch_all`].
#[derive(Debug, Clone)]
pub struct PgMemberQuery {
    company_id: Uuid,
    criteria: Vec<Criterion>,
    distinct: bool,
    empty: bool,
}

impl PgMemberQuery {
    pub fn for_company(company_id: Uuid) -> Self {
        Self {
            company_id,
            criteria: Vec::new(),
            distinct: false,
            empty: false,
        }
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn to_query_builder(&self) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new("SELECT ");
        if self.distinct {
            qb.push("DISTINCT ");
        }
        qb.push(MEMBER_COLUMNS)
            .push(" FROM members m WHERE m.company_id = ")
            .push_bind(self.company_id);

        if self.empty {
            qb.push(" AND FALSE");
        }
        for criterion in &self.criteria {
            qb.push(" AND ");
            push_criterion(&mut qb, criterion);
        }

        qb.push(" ORDER BY m.first_name, m.last_name, m.id");
        qb
    }

    pub async fn fetch_all(&self, pool: &PgPool) -> Result<Vec<Member>, sqlx::Error> {
        let mut qb = self.to_query_builder();
        qb.build_query_as::<Member>().fetch_all(pool).await
    }
}

impl MemberScope for PgMemberQuery {
    fn narrow(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    fn none(mut self) -> Self {
        self.empty = true;
        self
    }
}

fn push_criterion(qb: &mut QueryBuilder<'static, Postgres>, criterion: &Criterion) {
    match criterion {
        Criterion::InTeam(team_id) => {
            qb.push("EXISTS (SELECT 1 FROM team_members tm WHERE tm.member_id = m.id AND tm.team_id = ")
                .push_bind(*team_id)
                .push(")");
        }
        Criterion::InProject(project_id) => {
            qb.push("EXISTS (SELECT 1 FROM project_members pm WHERE pm.member_id = m.id AND pm.project_id = ")
                .push_bind(*project_id)
                .push(")");
        }
        Criterion::TimeOffWithin { range, statuses } => {
            if statuses.is_empty() {
                qb.push("FALSE");
                return;
            }
            qb.push("EXISTS (SELECT 1 FROM time_offs t WHERE t.member_id = m.id AND t.start_date <= ")
                .push_bind(range.end)
                .push(" AND t.end_date >= ")
                .push_bind(range.start)
                .push(" AND t.status IN (");
            {
                let mut separated = qb.separated(", ");
                for status in statuses {
                    separated.push_bind(*status);
                }
            }
            qb.push("))");
        }
        Criterion::ActiveContractOn(date) => {
            qb.push("EXISTS (SELECT 1 FROM contracts c WHERE c.member_id = m.id AND c.start_date <= ")
                .push_bind(*date)
                .push(" AND (c.end_date IS NULL OR c.end_date >= ")
                .push_bind(*date)
                .push("))");
        }
        Criterion::TerminatedOnOrBefore(date) => {
            qb.push("(m.termination_date IS NOT NULL AND m.termination_date <= ")
                .push_bind(*date)
                .push(")");
        }
        Criterion::NameContains(needle) => {
            qb.push("(m.first_name || ' ' || m.last_name) ILIKE ")
                .push_bind(like_pattern(needle))
                .push(" ESCAPE '\\'");
        }
    }
}

fn like_pattern(needle: &str) -> String {
    let escaped = needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::models::contract::{self, Contract};

use super::chart::{ChartData, Dataset, TableData};

pub const TOTAL_SALARY_LABEL: &str = "Total salary";
pub const TOTAL_SALARY_COLOR: &str = "#60A5FA";

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SalaryGroupKind {
    Teams,
    Projects,
}

impl SalaryGroupKind {
    pub fn name(&self) -> &'static str {
        match self {
            SalaryGroupKind::Teams => "Teams",
            SalaryGroupKind::Projects => "Projects",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SalaryReportParams {
    #[serde(rename = "type")]
    pub kind: SalaryGroupKind,
}

/// One (group, member) pair; `member_id` is `None` for a group without members.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GroupMembership {
    pub group_id: Uuid,
    pub group_title: String,
    pub member_id: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalaryTotals {
    pub total_salary: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SalaryGroup {
    pub id: Uuid,
    pub title: String,
    pub total_salary: f64,
}

/// Sum of today's salaries per team or per project.
#[derive(Debug, Clone)]
pub struct SalaryReport {
    kind: SalaryGroupKind,
    groups: Vec<SalaryGroup>,
}

impl SalaryReport {
    /// Groups keep the order of their first membership row.
    pub fn new(
        kind: SalaryGroupKind,
        memberships: &[GroupMembership],
        contracts: &[Contract],
        today: Date,
    ) -> Self {
        let mut by_member: HashMap<Uuid, Vec<Contract>> = HashMap::new();
        for c in contracts {
            by_member.entry(c.member_id).or_default().push(c.clone());
        }

        let mut groups: Vec<SalaryGroup> = Vec::new();
        let mut positions: HashMap<Uuid, usize> = HashMap::new();
        let mut counted: HashSet<(Uuid, Uuid)> = HashSet::new();

        for row in memberships {
            let pos = *positions.entry(row.group_id).or_insert_with(|| {
                groups.push(SalaryGroup {
                    id: row.group_id,
                    title: row.group_title.clone(),
                    total_salary: 0.0,
                });
                groups.len() - 1
            });

            let Some(member_id) = row.member_id else {
                continue;
            };
            if !counted.insert((row.group_id, member_id)) {
                continue;
            }
            let member_contracts = by_member.get(&member_id).map(Vec::as_slice).unwrap_or(&[]);
            groups[pos].total_salary += contract::salary(member_contracts, today);
        }

        Self { kind, groups }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn groups(&self) -> &[SalaryGroup] {
        &self.groups
    }

    pub fn to_chart_data(&self) -> ChartData<f64> {
        ChartData {
            labels: self.labels(),
            datasets: vec![Dataset::new(
                TOTAL_SALARY_LABEL,
                self.groups.iter().map(|g| g.total_salary).collect(),
                TOTAL_SALARY_COLOR,
            )],
        }
    }

    pub fn to_table_data(&self) -> TableData<SalaryTotals> {
        TableData::new(
            self.labels()
                .into_iter()
                .zip(&self.groups)
                .map(|(label, g)| {
                    (
                        label,
                        SalaryTotals {
                            total_salary: g.total_salary,
                        },
                    )
                })
                .collect(),
        )
    }

    /// Group titles, made unique by numbering repeats: "Backend", "Backend (2)".
    fn labels(&self) -> Vec<String> {
        let mut used = HashSet::new();
        self.groups
            .iter()
            .map(|g| {
                let mut label = g.title.clone();
                let mut n = 1;
                while !used.insert(label.clone()) {
                    n += 1;
                    label = format!("{} ({})", g.title, n);
                }
                label
            })
            .collect()
    }
}

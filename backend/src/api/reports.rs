use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use sqlx::PgPool;

use crate::{
    auth::AuthMember,
    error::{AppError, Result},
    models::contract::Contract,
    policies::CompanyPolicy,
    reports::{
        chart::{ChartData, TableData},
        salary::{GroupMembership, SalaryGroupKind, SalaryReportParams, SalaryTotals},
        starters_leavers::StartersLeaversCounts,
        SalaryReport, StartersLeaversParams, StartersLeaversReport,
    },
    search::PgMemberQuery,
};

#[derive(Debug, Serialize)]
pub struct StartersLeaversResponse {
    pub chart_data: ChartData<u32>,
    pub list: TableData<StartersLeaversCounts>,
}

pub async fn starters_leavers(
    State(pool): State<PgPool>,
    auth: AuthMember,
    Query(params): Query<StartersLeaversParams>,
) -> Result<Json<StartersLeaversResponse>> {
    if !CompanyPolicy::new(&auth.actor, auth.company_id()).manage_reports() {
        return Err(AppError::Forbidden);
    }

    let members = PgMemberQuery::for_company(auth.company_id())
        .fetch_all(&pool)
        .await?;
    let report = StartersLeaversReport::new(&members, params, auth.today);

    Ok(Json(StartersLeaversResponse {
        chart_data: report.to_chart_data(),
        list: report.to_table_data(),
    }))
}

#[derive(Debug, Serialize)]
pub struct SalaryResponse {
    pub chart_data: ChartData<f64>,
    pub collection: TableData<SalaryTotals>,
    pub name: &'static str,
}

pub async fn salary(
    State(pool): State<PgPool>,
    auth: AuthMember,
    Query(params): Query<SalaryReportParams>,
) -> Result<Json<SalaryResponse>> {
    if !CompanyPolicy::new(&auth.actor, auth.company_id()).manage_financial_reports() {
        return Err(AppError::Forbidden);
    }

    let sql = match params.kind {
        SalaryGroupKind::Teams => {
            r#"
            SELECT g.id AS group_id, g.title AS group_title, gm.member_id AS member_id
            FROM teams g
            LEFT JOIN team_members gm ON gm.team_id = g.id
            WHERE g.company_id = $1
            ORDER BY g.title, g.id
            "#
        }
        SalaryGroupKind::Projects => {
            r#"
            SELECT g.id AS group_id, g.title AS group_title, gm.member_id AS member_id
            FROM projects g
            LEFT JOIN project_members gm ON gm.project_id = g.id
            WHERE g.company_id = $1
            ORDER BY g.title, g.id
            "#
        }
    };
    let memberships = sqlx::query_as::<_, GroupMembership>(sql)
        .bind(auth.company_id())
        .fetch_all(&pool)
        .await?;

    let contracts = sqlx::query_as::<_, Contract>(
        r#"
        SELECT c.id, c.member_id, c.start_date, c.end_date,
               c.gross_salary_amount::FLOAT8 AS gross_salary_amount
        FROM contracts c
        JOIN members m ON m.id = c.member_id
        WHERE m.company_id = $1
          AND c.start_date <= $2
          AND (c.end_date IS NULL OR c.end_date >= $2)
        "#,
    )
    .bind(auth.company_id())
    .bind(auth.today)
    .fetch_all(&pool)
    .await?;

    let report = SalaryReport::new(params.kind, &memberships, &contracts, auth.today);

    Ok(Json(SalaryResponse {
        chart_data: report.to_chart_data(),
        collection: report.to_table_data(),
        name: report.name(),
    }))
}

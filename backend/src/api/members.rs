use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use sqlx::PgPool;
use validator::Validate;

use crate::{
    auth::AuthMember,
    error::{AppError, Result},
    models::{
        contract::Contract,
        member::{Member, MemberProfile},
        project::Project,
        team::Team,
    },
    policies::{team::scope_visible_teams, CompanyPolicy},
    search::{postgres::MEMBER_COLUMNS, MembersSearch, MembersSearchParams, PgMemberQuery},
};

/// Directory page payload: the matching members plus the filter options.
#[derive(Debug, Serialize)]
pub struct MembersIndex {
    pub members: Vec<Member>,
    pub teams: Vec<Team>,
    pub projects: Vec<Project>,
}

pub async fn index(
    State(pool): State<PgPool>,
    auth: AuthMember,
    Query(params): Query<MembersSearchParams>,
) -> Result<Json<MembersIndex>> {
    params.validate()?;

    if !CompanyPolicy::new(&auth.actor, auth.company_id()).list_members() {
        return Err(AppError::Forbidden);
    }

    let search = MembersSearch::new(params, auth.today);
    let members = search
        .call(PgMemberQuery::for_company(auth.company_id()))
        .fetch_all(&pool)
        .await?;

    let teams = sqlx::query_as::<_, Team>(
        r#"
        SELECT id, company_id, title, visibility, created_at
        FROM teams WHERE company_id = $1
        ORDER BY title
        "#,
    )
    .bind(auth.company_id())
    .fetch_all(&pool)
    .await?;

    let projects = sqlx::query_as::<_, Project>(
        r#"
        SELECT id, company_id, title, created_at
        FROM projects WHERE company_id = $1
        ORDER BY title
        "#,
    )
    .bind(auth.company_id())
    .fetch_all(&pool)
    .await?;

    Ok(Json(MembersIndex {
        members,
        teams: scope_visible_teams(&auth.actor, teams),
        projects,
    }))
}

pub async fn me(State(pool): State<PgPool>, auth: AuthMember) -> Result<Json<MemberProfile>> {
    let sql = format!("SELECT {} FROM members m WHERE m.id = $1", MEMBER_COLUMNS);
    let member = sqlx::query_as::<_, Member>(&sql)
        .bind(auth.id())
        .fetch_optional(&pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Member not found".into()))?;

    let contracts = sqlx::query_as::<_, Contract>(
        r#"
        SELECT id, member_id, start_date, end_date,
               gross_salary_amount::FLOAT8 AS gross_salary_amount
        FROM contracts WHERE member_id = $1
        ORDER BY start_date
        "#,
    )
    .bind(auth.id())
    .fetch_all(&pool)
    .await?;

    Ok(Json(MemberProfile::build(member, &contracts, auth.today)))
}

use axum::{
    extract::{Path, State},
    Json,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    auth::AuthMember,
    error::{AppError, Result},
    models::team::{Team, TeamWithMembers},
    policies::TeamPolicy,
    search::{Criterion, MemberScope, PgMemberQuery},
};

pub async fn list_teams(State(pool): State<PgPool>, auth: AuthMember) -> Result<Json<Vec<Team>>> {
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

    Ok(Json(TeamPolicy::new(&auth.actor).scope(teams)))
}

pub async fn get_team(
    State(pool): State<PgPool>,
    auth: AuthMember,
    Path(id): Path<Uuid>,
) -> Result<Json<TeamWithMembers>> {
    let team = fetch_team(&pool, &auth, id).await?;

    if !TeamPolicy::new(&auth.actor).show(&team) {
        return Err(AppError::Forbidden);
    }

    let members = PgMemberQuery::for_company(team.company_id)
        .narrow(Criterion::InTeam(team.id))
        .fetch_all(&pool)
        .await?;

    Ok(Json(TeamWithMembers { team, members }))
}

pub async fn leave_team(
    State(pool): State<PgPool>,
    auth: AuthMember,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    let team = fetch_team(&pool, &auth, id).await?;

    if !TeamPolicy::new(&auth.actor).leave(&team) {
        return Err(AppError::Forbidden);
    }

    sqlx::query("DELETE FROM team_members WHERE team_id = $1 AND member_id = $2")
        .bind(team.id)
        .bind(auth.id())
        .execute(&pool)
        .await?;

    tracing::info!(team_id = %team.id, member_id = %auth.id(), "Member left team");

    Ok(Json(serde_json::json!({ "ok": true })))
}

/// Teams of other companies are reported as missing.
async fn fetch_team(pool: &PgPool, auth: &AuthMember, id: Uuid) -> Result<Team> {
    sqlx::query_as::<_, Team>(
        "SELECT id, company_id, title, visibility, created_at FROM teams WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .filter(|team| auth.actor.same_company(team.company_id))
    .ok_or_else(|| AppError::NotFound("Team not found".into()))
}

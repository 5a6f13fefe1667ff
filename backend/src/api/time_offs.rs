use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    auth::AuthMember,
    error::Result,
    models::{
        member::Member,
        time_off::{TimeOffEntry, TimeOffListParams, TimeOffStatus},
    },
    search::{PgMemberQuery, TimeOffSearch, TimeOffSearchParams},
};

pub async fn list(
    State(pool): State<PgPool>,
    auth: AuthMember,
    Query(params): Query<TimeOffListParams>,
) -> Result<Json<Vec<TimeOffEntry>>> {
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
        r#"
        SELECT t.id, t.member_id, t.start_date, t.end_date, t.status, t.approver_ids,
               t.created_at, m.first_name, m.last_name
        FROM time_offs t
        JOIN members m ON m.id = t.member_id
        WHERE m.company_id = "#,
    );
    qb.push_bind(auth.company_id()).push(" AND t.status IN (");
    {
        let mut separated = qb.separated(", ");
        for status in TimeOffStatus::PENDING_OR_APPROVED {
            separated.push_bind(status);
        }
    }
    qb.push(") AND ");
    params.scope.push_condition(&mut qb, auth.today);
    qb.push(" ORDER BY t.start_date, t.end_date");

    let entries = qb.build_query_as::<TimeOffEntry>().fetch_all(&pool).await?;
    Ok(Json(entries))
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub year: i32,
    pub month: u8,
    pub members: Vec<Member>,
}

pub async fn calendar(
    State(pool): State<PgPool>,
    auth: AuthMember,
    Query(params): Query<TimeOffSearchParams>,
) -> Result<Json<CalendarResponse>> {
    let search = TimeOffSearch::new(params, auth.today)?;
    let members = search
        .call(PgMemberQuery::for_company(auth.company_id()))
        .fetch_all(&pool)
        .await?;

    Ok(Json(CalendarResponse {
        year: search.year,
        month: search.month.into(),
        members,
    }))
}

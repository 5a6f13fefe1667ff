use std::collections::HashSet;

use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, HeaderMap},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::clock;
use crate::error::AppError;
use crate::models::company::Company;
use crate::policies::Actor;
use crate::AppState;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "member_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Manager,
    Employee,
    Guest,
}

impl Role {
    pub fn is_manager(&self) -> bool {
        matches!(self, Role::Manager)
    }

    pub fn is_employee(&self) -> bool {
        matches!(self, Role::Employee)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,        // member id
    pub company_id: Uuid, // company id
    pub role: Role,
    pub exp: i64,
    pub iat: i64,
}

/// The authenticated member, with everything authorization needs.
pub struct AuthMember {
    pub actor: Actor,
    /// Calendar date in the member's company timezone.
    pub today: Date,
}

impl AuthMember {
    pub fn id(&self) -> Uuid {
        self.actor.id
    }

    pub fn company_id(&self) -> Uuid {
        self.actor.company_id
    }
}

#[derive(sqlx::FromRow)]
struct AuthMemberRow {
    role: Role,
    termination_date: Option<Date>,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthMember
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let token = extract_bearer_token(&parts.headers).ok_or(AppError::Unauthorized)?;

        let key = DecodingKey::from_secret(app_state.jwt_secret.as_bytes());
        let claims = decode::<Claims>(&token, &key, &Validation::new(Algorithm::HS256))
            .map_err(|e| {
                tracing::warn!("JWT decode failed: {}", e);
                AppError::Unauthorized
            })?
            .claims;

        // Role and memberships come from the database, not the token
        let row = sqlx::query_as::<_, AuthMemberRow>(
            "SELECT role, termination_date FROM members WHERE id = $1 AND company_id = $2",
        )
        .bind(claims.sub)
        .bind(claims.company_id)
        .fetch_optional(&app_state.pool)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Auth DB check failed: {}", e)))?
        .ok_or(AppError::Unauthorized)?;

        let company = sqlx::query_as::<_, Company>(
            "SELECT id, name, timezone, created_at FROM companies WHERE id = $1",
        )
        .bind(claims.company_id)
        .fetch_one(&app_state.pool)
        .await?;

        let today = clock::today_in(&company.timezone);
        if row.termination_date.is_some_and(|d| d < today) {
            return Err(AppError::Unauthorized);
        }

        let team_ids: HashSet<Uuid> =
            sqlx::query_scalar::<_, Uuid>("SELECT team_id FROM team_members WHERE member_id = $1")
                .bind(claims.sub)
                .fetch_all(&app_state.pool)
                .await?
                .into_iter()
                .collect();

        Ok(AuthMember {
            actor: Actor {
                id: claims.sub,
                company_id: company.id,
                role: row.role,
                team_ids,
            },
            today,
        })
    }
}

fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let auth = headers.get("Authorization")?.to_str().ok()?;
    let token = auth.strip_prefix("Bearer ")?;
    Some(token.to_string())
}

pub fn create_token(
    member_id: Uuid,
    company_id: Uuid,
    role: Role,
    secret: &str,
    expiry_hours: u64,
) -> anyhow::Result<String> {
    use jsonwebtoken::{encode, EncodingKey, Header};

    let now = OffsetDateTime::now_utc();
    let exp = now + time::Duration::hours(expiry_hours as i64);

    let claims = Claims {
        sub: member_id,
        company_id,
        role,
        exp: exp.unix_timestamp(),
        iat: now.unix_timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

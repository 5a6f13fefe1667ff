use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::member::Member;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "team_visibility", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TeamVisibility {
    Private,
    Hidden,
    Visible,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Team {
    pub id: Uuid,
    pub company_id: Uuid,
    pub title: String,
    pub visibility: TeamVisibility,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Team {
    pub fn is_private(&self) -> bool {
        self.visibility == TeamVisibility::Private
    }

    pub fn is_hidden(&self) -> bool {
        self.visibility == TeamVisibility::Hidden
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == TeamVisibility::Visible
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamWithMembers {
    #[serde(flatten)]
    pub team: Team,
    pub members: Vec<Member>,
}

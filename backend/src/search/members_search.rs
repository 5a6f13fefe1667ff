use serde::Deserialize;
use time::Date;
use uuid::Uuid;
use validator::Validate;

use super::scope::{Criterion, MemberScope};

/// Query parameters of the member directory.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct MembersSearchParams {
    pub status: Option<String>,
    #[validate(length(max = 100))]
    pub search: Option<String>,
    pub team_id: Option<Uuid>,
    pub project_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryStatus {
    All,
    Current,
    Former,
    Unknown(String),
}

/// Member directory filter. Absent parameters do not narrow.
#[derive(Debug, Clone)]
pub struct MembersSearch {
    pub status: DirectoryStatus,
    pub search: Option<String>,
    pub team_id: Option<Uuid>,
    pub project_id: Option<Uuid>,
    today: Date,
}

impl MembersSearch {
    pub fn new(params: MembersSearchParams, today: Date) -> Self {
        let status = match params.status.as_deref().map(str::trim) {
            None | Some("") => DirectoryStatus::All,
            Some("current") => DirectoryStatus::Current,
            Some("former") => DirectoryStatus::Former,
            Some(other) => DirectoryStatus::Unknown(other.to_string()),
        };
        let search = params
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            status,
            search,
            team_id: params.team_id,
            project_id: params.project_id,
            today,
        }
    }

    pub fn call<S: MemberScope>(&self, members: S) -> S {
        let mut query = match &self.status {
            DirectoryStatus::All => members,
            DirectoryStatus::Current => members
                .narrow(Criterion::ActiveContractOn(self.today))
                .distinct(),
            DirectoryStatus::Former => members.narrow(Criterion::TerminatedOnOrBefore(self.today)),
            DirectoryStatus::Unknown(_) => return members.none(),
        };
        if let Some(search) = &self.search {
            query = query.narrow(Criterion::NameContains(search.clone()));
        }
        if let Some(team_id) = self.team_id {
            query = query.narrow(Criterion::InTeam(team_id));
        }
        if let Some(project_id) = self.project_id {
            query = query.narrow(Criterion::InProject(project_id));
        }
        query
    }
}

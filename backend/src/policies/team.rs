use std::collections::HashSet;

use crate::models::team::Team;

use super::Actor;

pub struct TeamPolicy<'a> {
    actor: &'a Actor,
}

impl<'a> TeamPolicy<'a> {
    pub fn new(actor: &'a Actor) -> Self {
        Self { actor }
    }

    /// Private teams: managers and the team's own members. Others: anyone in the company.
    pub fn show(&self, team: &Team) -> bool {
        if !self.same_company(team) {
            return false;
        }
        if team.is_private() {
            return self.actor.is_manager() || self.have_team(team);
        }
        true
    }

    pub fn leave(&self, team: &Team) -> bool {
        self.same_company(team) && self.have_team(team)
    }

    /// Teams of the actor's company the actor may list, each at most once.
    pub fn scope<I>(&self, teams: I) -> Vec<Team>
    where
        I: IntoIterator<Item = Team>,
    {
        let mut seen = HashSet::new();
        teams
            .into_iter()
            .filter(|team| self.same_company(team))
            .filter(|team| self.in_scope(team))
            .filter(|team| seen.insert(team.id))
            .collect()
    }

    fn in_scope(&self, team: &Team) -> bool {
        if self.actor.is_manager() {
            return true;
        }
        if self.actor.role.is_employee() {
            return team.is_visible() || (team.is_hidden() && self.have_team(team));
        }
        false
    }

    fn have_team(&self, team: &Team) -> bool {
        self.actor.belongs_to_team(team.id)
    }

    fn same_company(&self, team: &Team) -> bool {
        self.actor.same_company(team.company_id)
    }
}

pub fn can_view(actor: &Actor, team: &Team) -> bool {
    TeamPolicy::new(actor).show(team)
}

pub fn can_leave(actor: &Actor, team: &Team) -> bool {
    TeamPolicy::new(actor).leave(team)
}

pub fn scope_visible_teams<I>(actor: &Actor, company_teams: I) -> Vec<Team>
where
    I: IntoIterator<Item = Team>,
{
    TeamPolicy::new(actor).scope(company_teams)
}

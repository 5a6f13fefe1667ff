pub mod members;
pub mod reports;
pub mod teams;
pub mod time_offs;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        // Member directory
        .route("/api/members", get(members::index))
        .route("/api/members/me", get(members::me))
        // Teams
        .route("/api/teams", get(teams::list_teams))
        .route("/api/teams/:id", get(teams::get_team))
        .route("/api/teams/:id/leave", post(teams::leave_team))
        // Time off
        .route("/api/time-offs", get(time_offs::list))
        .route("/api/time-offs/calendar", get(time_offs::calendar))
        // Reports
        .route("/api/reports/starters-leavers", get(reports::starters_leavers))
        .route("/api/reports/salary", get(reports::salary))
        .with_state(state)
}

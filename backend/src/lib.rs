pub mod api;
pub mod auth;
pub mod clock;
pub mod config;
pub mod error;
pub mod jobs;
pub mod mailer;
pub mod models;
pub mod policies;
pub mod reports;
pub mod search;

use sqlx::PgPool;

/// Shared application state available to all handlers via axum's State extractor.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub jwt_secret: String,
}

impl axum::extract::FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

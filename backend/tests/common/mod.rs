#![allow(dead_code)]
pub mod factories;

use std::net::SocketAddr;

use sqlx::{postgres::PgPoolOptions, PgPool};
use time::Date;
use uuid::Uuid;

use staffbook_backend::{
    api,
    auth::{create_token, Role},
    AppState,
};

pub const JWT_SECRET: &str = "test-secret-that-is-at-least-32-chars-long!!";
const JWT_EXPIRY_HOURS: u64 = 12;

/// Tests write and delete data, so they only run against an explicitly configured database.
fn database_url() -> Option<String> {
    std::env::var("TEST_DATABASE_URL").ok()
}

/// Spin up a real Axum server on a random port, returning its address and the
/// database pool. `None` when `TEST_DATABASE_URL` is unset; callers return early.
pub async fn setup_test_app() -> Option<(SocketAddr, PgPool)> {
    let Some(url) = database_url() else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return None;
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let state = AppState {
        pool: pool.clone(),
        jwt_secret: JWT_SECRET.to_string(),
    };
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Some((addr, pool))
}

/// Create a UTC test company. Returns the company ID.
pub async fn create_test_company(pool: &PgPool, suffix: &str) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO companies (id, name, timezone) VALUES ($1, $2, 'UTC')")
        .bind(id)
        .bind(format!("Test Company {}", suffix))
        .execute(pool)
        .await
        .expect("Failed to create test company");
    id
}

/// Create a member with a unique email. Returns the member ID.
pub async fn create_test_member(pool: &PgPool, company_id: Uuid, role: &str, first_name: &str) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO members (id, company_id, first_name, last_name, email, role) \
         VALUES ($1, $2, $3, 'Test', $4, $5::member_role)",
    )
    .bind(id)
    .bind(company_id)
    .bind(first_name)
    .bind(format!("{}+{}@test.local", first_name.to_lowercase(), &id.to_string()[..8]))
    .bind(role)
    .execute(pool)
    .await
    .expect("Failed to create test member");
    id
}

pub async fn create_test_team(pool: &PgPool, company_id: Uuid, title: &str, visibility: &str) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO teams (id, company_id, title, visibility) VALUES ($1, $2, $3, $4::team_visibility)",
    )
    .bind(id)
    .bind(company_id)
    .bind(title)
    .bind(visibility)
    .execute(pool)
    .await
    .expect("Failed to create test team");
    id
}

pub async fn add_to_team(pool: &PgPool, team_id: Uuid, member_id: Uuid) {
    sqlx::query("INSERT INTO team_members (team_id, member_id) VALUES ($1, $2)")
        .bind(team_id)
        .bind(member_id)
        .execute(pool)
        .await
        .expect("Failed to add team member");
}

pub async fn create_test_time_off(
    pool: &PgPool,
    member_id: Uuid,
    start_date: Date,
    end_date: Date,
    status: &str,
) {
    sqlx::query(
        "INSERT INTO time_offs (id, member_id, start_date, end_date, status) \
         VALUES ($1, $2, $3, $4, $5::time_off_status)",
    )
    .bind(Uuid::new_v4())
    .bind(member_id)
    .bind(start_date)
    .bind(end_date)
    .bind(status)
    .execute(pool)
    .await
    .expect("Failed to create time off");
}

pub async fn create_test_contract(
    pool: &PgPool,
    member_id: Uuid,
    start_date: Date,
    end_date: Option<Date>,
    gross_salary_amount: Option<f64>,
) {
    sqlx::query(
        "INSERT INTO contracts (id, member_id, start_date, end_date, gross_salary_amount) \
         VALUES ($1, $2, $3, $4, $5::FLOAT8)",
    )
    .bind(Uuid::new_v4())
    .bind(member_id)
    .bind(start_date)
    .bind(end_date)
    .bind(gross_salary_amount)
    .execute(pool)
    .await
    .expect("Failed to create contract");
}

pub async fn create_test_project(pool: &PgPool, company_id: Uuid, title: &str) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO projects (id, company_id, title) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(company_id)
        .bind(title)
        .execute(pool)
        .await
        .expect("Failed to create test project");
    id
}

pub async fn add_to_project(pool: &PgPool, project_id: Uuid, member_id: Uuid) {
    sqlx::query("INSERT INTO project_members (project_id, member_id) VALUES ($1, $2)")
        .bind(project_id)
        .bind(member_id)
        .execute(pool)
        .await
        .expect("Failed to add project member");
}

pub async fn terminate_member(pool: &PgPool, member_id: Uuid, termination_date: Date) {
    sqlx::query("UPDATE members SET termination_date = $2 WHERE id = $1")
        .bind(member_id)
        .bind(termination_date)
        .execute(pool)
        .await
        .expect("Failed to terminate member");
}

pub async fn mark_profile_filled(pool: &PgPool, member_id: Uuid) {
    sqlx::query("UPDATE members SET profile_filled = true WHERE id = $1")
        .bind(member_id)
        .execute(pool)
        .await
        .expect("Failed to mark profile filled");
}

/// Token for a member; the extractor re-reads the role from the database anyway.
pub fn token_for(member_id: Uuid, company_id: Uuid) -> String {
    create_token(member_id, company_id, Role::Employee, JWT_SECRET, JWT_EXPIRY_HOURS)
        .expect("Failed to create token")
}

/// Build a reqwest client (reusable across requests in a test).
pub fn http_client() -> reqwest::Client {
    reqwest::Client::new()
}

/// Clean up all test data for a given company. Call this at the end of tests.
pub async fn cleanup_test_company(pool: &PgPool, company_id: Uuid) {
    // Delete in dependency order (child tables first)
    let cleanup_queries = [
        "DELETE FROM time_offs WHERE member_id IN (SELECT id FROM members WHERE company_id = $1)",
        "DELETE FROM contracts WHERE member_id IN (SELECT id FROM members WHERE company_id = $1)",
        "DELETE FROM team_members WHERE team_id IN (SELECT id FROM teams WHERE company_id = $1)",
        "DELETE FROM project_members WHERE project_id IN (SELECT id FROM projects WHERE company_id = $1)",
        "DELETE FROM teams WHERE company_id = $1",
        "DELETE FROM projects WHERE company_id = $1",
        "DELETE FROM members WHERE company_id = $1",
        "DELETE FROM companies WHERE id = $1",
    ];

    for q in cleanup_queries {
        let _ = sqlx::query(q).bind(company_id).execute(pool).await;
    }
}

//! Sends "fill in your profile" reminders once and exits. Meant for cron.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use staffbook_backend::{
    config::{self, MailerConfig},
    jobs::profile_reminder,
    mailer,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mail_cfg = MailerConfig::from_env();
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config::database_url()?)
        .await?;

    let mailer = mailer::from_config(&mail_cfg);
    let summary = profile_reminder::run(&pool, mailer.as_ref(), &mail_cfg.from).await?;

    if !summary.failed.is_empty() {
        tracing::warn!(failed = ?summary.failed, "Some reminders were not delivered");
    }

    Ok(())
}

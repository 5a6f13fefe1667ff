use anyhow::Context;

pub const DEFAULT_MAIL_FROM: &str = "no-reply@staffbook.local";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub listen_addr: String,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let jwt_secret = std::env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        if jwt_secret.len() < 32 {
            anyhow::bail!("JWT_SECRET must be at least 32 characters for security");
        }
        if jwt_secret.contains("change_me") {
            anyhow::bail!("JWT_SECRET contains placeholder value, set a real secret before running");
        }

        Ok(Self {
            database_url: database_url()?,
            jwt_secret,
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:5173".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        })
    }
}

/// Settings for the reminder job's outbound mail.
#[derive(Clone, Debug)]
pub struct MailerConfig {
    pub from: String,
    pub webhook_url: Option<String>,
    pub webhook_token: Option<String>,
}

impl MailerConfig {
    pub fn from_env() -> Self {
        Self {
            from: std::env::var("MAIL_FROM").unwrap_or_else(|_| DEFAULT_MAIL_FROM.into()),
            webhook_url: non_empty_var("MAIL_WEBHOOK_URL"),
            webhook_token: non_empty_var("MAIL_WEBHOOK_TOKEN"),
        }
    }
}

pub fn database_url() -> anyhow::Result<String> {
    std::env::var("DATABASE_URL").context("DATABASE_URL must be set")
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

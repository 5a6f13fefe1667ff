//! Outbound email. Delivery transports sit behind [`Mailer`].

use anyhow::Context;
use async_trait::async_trait;
use serde::Serialize;

use crate::config::MailerConfig;
use crate::models::member::Member;

pub const FILL_OUT_PROFILE_SUBJECT: &str = "Please fill in your profile";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Email {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn deliver(&self, email: &Email) -> anyhow::Result<()>;
}

/// Messages addressed to members.
pub struct MemberMailer;

impl MemberMailer {
    pub fn fill_out_profile(member: &Member, from: &str) -> Email {
        Email {
            from: from.to_string(),
            to: member.email.clone(),
            subject: FILL_OUT_PROFILE_SUBJECT.to_string(),
            text: format!(
                "Hi {},\n\nYour profile is missing some details. \
                 Please sign in and complete it so your colleagues can find you.\n",
                member.first_name
            ),
        }
    }
}

/// Writes messages to the log instead of sending them.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn deliver(&self, email: &Email) -> anyhow::Result<()> {
        tracing::info!(to = %email.to, subject = %email.subject, "Email (not sent): {}", email.text);
        Ok(())
    }
}

/// POSTs each message as JSON to an HTTP mail API.
pub struct WebhookMailer {
    client: reqwest::Client,
    url: String,
    token: Option<String>,
}

impl WebhookMailer {
    pub fn new(url: String, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            token,
        }
    }
}

#[async_trait]
impl Mailer for WebhookMailer {
    async fn deliver(&self, email: &Email) -> anyhow::Result<()> {
        let mut req = self.client.post(&self.url).json(email);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req.send()
            .await
            .context("mail API request failed")?
            .error_for_status()
            .context("mail API rejected the message")?;
        Ok(())
    }
}

pub fn from_config(cfg: &MailerConfig) -> Box<dyn Mailer> {
    match &cfg.webhook_url {
        Some(url) => Box::new(WebhookMailer::new(url.clone(), cfg.webhook_token.clone())),
        None => {
            tracing::warn!("MAIL_WEBHOOK_URL not set, emails will only be logged");
            Box::new(LogMailer)
        }
    }
}

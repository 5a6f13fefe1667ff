//! Reminds members with an unfilled profile to complete it.
//!
//! A failed delivery is logged and counted; it never stops the batch.

use std::collections::HashSet;

use futures::{Stream, TryStreamExt};
use sqlx::PgPool;
use uuid::Uuid;

use crate::mailer::{Mailer, MemberMailer};
use crate::models::member::Member;

const NOT_FILLED_PROFILES_SQL: &str = r#"
    SELECT m.id, m.company_id, m.first_name, m.last_name, m.email, m.role,
           m.locale, m.date_of_birth, m.hire_date, m.termination_date,
           m.profile_filled, m.created_at
    FROM members m
    WHERE m.profile_filled = false
    ORDER BY m.id
"#;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReminderSummary {
    pub sent: usize,
    pub failed: Vec<Uuid>,
}

impl ReminderSummary {
    pub fn attempted(&self) -> usize {
        self.sent + self.failed.len()
    }
}

/// Members whose profile is not filled, across all companies. Employment
/// status does not matter.
pub fn not_filled_profiles(pool: &PgPool) -> impl Stream<Item = Result<Member, sqlx::Error>> + '_ {
    sqlx::query_as::<_, Member>(NOT_FILLED_PROFILES_SQL).fetch(pool)
}

/// Sends one reminder per distinct member of `members`, in order.
pub async fn send_reminders<S, M>(
    members: S,
    mailer: &M,
    from: &str,
) -> Result<ReminderSummary, sqlx::Error>
where
    S: Stream<Item = Result<Member, sqlx::Error>>,
    M: Mailer + ?Sized,
{
    let mut members = std::pin::pin!(members);
    let mut seen = HashSet::new();
    let mut summary = ReminderSummary::default();

    while let Some(member) = members.try_next().await? {
        if !seen.insert(member.id) {
            continue;
        }
        let email = MemberMailer::fill_out_profile(&member, from);
        match mailer.deliver(&email).await {
            Ok(()) => summary.sent += 1,
            Err(e) => {
                tracing::warn!(member_id = %member.id, to = %email.to, "Profile reminder failed: {:#}", e);
                summary.failed.push(member.id);
            }
        }
    }

    Ok(summary)
}

pub async fn run<M>(pool: &PgPool, mailer: &M, from: &str) -> Result<ReminderSummary, sqlx::Error>
where
    M: Mailer + ?Sized,
{
    let summary = send_reminders(not_filled_profiles(pool), mailer, from).await?;
    tracing::info!(
        sent = summary.sent,
        failed = summary.failed.len(),
        "Profile reminders processed"
    );
    Ok(summary)
}

//! Wall-clock access lives here and nowhere else; everything below the
//! HTTP layer takes `today` as a parameter.

use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;
use time::Date;

/// Calendar date of `instant` in the named IANA timezone. Unknown names fall back to UTC.
pub fn date_in_zone(instant: DateTime<Utc>, timezone: &str) -> Date {
    let local = match timezone.parse::<Tz>() {
        Ok(tz) => instant.with_timezone(&tz).date_naive(),
        Err(_) => {
            tracing::warn!(timezone, "Unknown timezone, using UTC");
            instant.date_naive()
        }
    };

    Date::from_ordinal_date(local.year(), local.ordinal() as u16)
        .unwrap_or_else(|_| time::OffsetDateTime::now_utc().date())
}

pub fn today_in(timezone: &str) -> Date {
    date_in_zone(Utc::now(), timezone)
}

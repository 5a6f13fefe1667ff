mod common;

use chrono::{TimeZone, Utc};
use common::factories;
use staffbook_backend::{
    clock::date_in_zone,
    models::{
        member::MemberProfile,
        time_off::{TimeOffScope, TimeOffStatus},
    },
};
use time::{macros::date, Date};
use uuid::Uuid;

const TODAY: Date = date!(2024 - 06 - 15);

#[test]
fn locale_defaults_to_english() {
    let mut member = factories::member(Uuid::new_v4(), "Ivan", "Ivanov");
    assert_eq!(member.locale(), "en");
    member.locale = String::new();
    assert_eq!(member.locale(), "en");
    member.locale = "ru".into();
    assert_eq!(member.locale(), "ru");
}

#[test]
fn birthday_helpers_are_none_without_date_of_birth() {
    let member = factories::member(Uuid::new_v4(), "No", "Birthday");
    assert_eq!(member.birthday_today(TODAY), None);
    assert_eq!(member.birthday_passed(TODAY), None);
    assert_eq!(member.birthday_will_be(TODAY), None);
    assert_eq!(member.days_until_birthday(TODAY), None);
}

#[test]
fn days_until_birthday_later_this_year() {
    let mut member = factories::member(Uuid::new_v4(), "June", "Later");
    member.date_of_birth = Some(date!(1990 - 06 - 20));
    assert_eq!(member.birthday_will_be(TODAY), Some(true));
    assert_eq!(member.days_until_birthday(TODAY), Some(5));
}

#[test]
fn days_until_birthday_rolls_into_next_year() {
    let mut member = factories::member(Uuid::new_v4(), "Jan", "Earlier");
    member.date_of_birth = Some(date!(1985 - 06 - 14));
    assert_eq!(member.birthday_passed(TODAY), Some(true));
    assert_eq!(member.days_until_birthday(TODAY), Some(364));
}

#[test]
fn birthday_today() {
    let mut member = factories::member(Uuid::new_v4(), "Party", "Time");
    member.date_of_birth = Some(date!(2000 - 06 - 15));
    assert_eq!(member.birthday_today(TODAY), Some(true));
    assert_eq!(member.days_until_birthday(TODAY), Some(0));
}

#[test]
fn leap_day_birthday_falls_on_feb_28() {
    let mut member = factories::member(Uuid::new_v4(), "Leap", "Year");
    member.date_of_birth = Some(date!(2000 - 02 - 29));
    assert_eq!(member.birthday_today(date!(2023 - 02 - 28)), Some(true));
    assert_eq!(member.birthday_today(date!(2024 - 02 - 29)), Some(true));
}

#[test]
fn profile_carries_salary_and_birthday() {
    let mut member = factories::member(Uuid::new_v4(), "Pro", "File");
    member.date_of_birth = Some(date!(1990 - 06 - 20));
    let contracts = [factories::contract(member.id, date!(2024 - 01 - 01), None, Some(1000.0))];

    let profile = MemberProfile::build(member, &contracts, TODAY);
    assert_eq!(profile.full_name, "Pro File");
    assert_eq!(profile.salary, 1000.0);
    assert_eq!(profile.days_until_birthday, Some(5));

    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json["first_name"], "Pro");
    assert_eq!(json["salary"], 1000.0);
}

#[test]
fn time_off_scopes() {
    let member_id = Uuid::new_v4();
    let current = factories::time_off(member_id, date!(2024 - 06 - 10), date!(2024 - 06 - 20), TimeOffStatus::Approved);
    let upcoming = factories::time_off(member_id, date!(2024 - 06 - 28), date!(2024 - 07 - 05), TimeOffStatus::Pending);
    let far = factories::time_off(member_id, date!(2024 - 07 - 01), date!(2024 - 07 - 02), TimeOffStatus::Pending);
    let past = factories::time_off(member_id, date!(2024 - 05 - 01), date!(2024 - 05 - 03), TimeOffStatus::Approved);

    assert!(TimeOffScope::Current.matches(&current, TODAY));
    assert!(!TimeOffScope::Current.matches(&upcoming, TODAY));

    assert!(TimeOffScope::Upcoming.matches(&upcoming, TODAY));
    assert!(!TimeOffScope::Upcoming.matches(&current, TODAY));
    // Exactly two weeks out is no longer "upcoming"
    assert!(!TimeOffScope::Upcoming.matches(&far, date!(2024 - 06 - 17)));

    assert!(TimeOffScope::CurrentOrUpcoming.matches(&current, TODAY));
    assert!(TimeOffScope::CurrentOrUpcoming.matches(&far, TODAY));
    assert!(!TimeOffScope::CurrentOrUpcoming.matches(&past, TODAY));

    assert!(TimeOffStatus::Pending.is_pending_or_approved());
    assert!(!TimeOffStatus::Rejected.is_pending_or_approved());
}

#[test]
fn today_follows_company_timezone() {
    let instant = Utc.with_ymd_and_hms(2024, 6, 15, 23, 30, 0).unwrap();
    assert_eq!(date_in_zone(instant, "UTC"), date!(2024 - 06 - 15));
    assert_eq!(date_in_zone(instant, "Asia/Tokyo"), date!(2024 - 06 - 16));
    assert_eq!(date_in_zone(instant, "America/New_York"), date!(2024 - 06 - 15));
    assert_eq!(date_in_zone(instant, "Not/AZone"), date!(2024 - 06 - 15));
}

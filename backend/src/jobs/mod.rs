pub mod profile_reminder;

use time::Date;
use uuid::Uuid;

use crate::models::{common::DateRange, time_off::TimeOffStatus};

/// One narrowing step over a member collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    InTeam(Uuid),
    InProject(Uuid),
    /// Has a time-off overlapping `range` whose status is one of `statuses`.
    TimeOffWithin {
        range: DateRange,
        statuses: Vec<TimeOffStatus>,
    },
    ActiveContractOn(Date),
    TerminatedOnOrBefore(Date),
    /// Case-insensitive substring of the full name.
    NameContains(String),
}

/// The capability a member collection must offer to be searched.
///
/// Narrowing is conjunctive and order-independent.
pub trait MemberScope: Sized {
    fn narrow(self, criterion: Criterion) -> Self;

    fn distinct(self) -> Self;

    /// Matches nobody.
    fn none(self) -> Self;
}

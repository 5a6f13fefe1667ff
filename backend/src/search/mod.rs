//! Composable member filtering.
//!
//! Searches describe *what* to narrow by as [`Criterion`] values and hand
//! them to a [`MemberScope`]; the scope decides how to evaluate them. Two
//! scopes exist: [`MemberSet`] over loaded records and [`PgMemberQuery`],
//! which only builds SQL once fetched.

pub mod members_search;
pub mod memory;
pub mod postgres;
pub mod scope;
pub mod time_off_search;

pub use members_search::{MembersSearch, MembersSearchParams};
pub use memory::MemberSet;
pub use postgres::PgMemberQuery;
pub use scope::{Criterion, MemberScope};
pub use time_off_search::{TimeOffSearch, TimeOffSearchParams};

//! Chart- and table-ready aggregates for the reporting pages.

pub mod chart;
pub mod salary;
pub mod starters_leavers;

pub use chart::{ChartData, Dataset};
pub use salary::{SalaryGroupKind, SalaryReport};
pub use starters_leavers::{StartersLeaversParams, StartersLeaversReport};

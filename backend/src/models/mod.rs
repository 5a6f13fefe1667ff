pub mod common;
pub mod company;
pub mod contract;
pub mod member;
pub mod project;
pub mod team;
pub mod time_off;

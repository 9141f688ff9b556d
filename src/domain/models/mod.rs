pub mod booking;
pub mod modifier;
pub mod pricing;
pub mod schedule;

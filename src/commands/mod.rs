//! Command implementations

pub mod simple;
pub mod today;

pub use simple::run_simple;
pub use today::{TodayInfo, today_info};

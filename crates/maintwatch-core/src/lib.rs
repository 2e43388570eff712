//! Maintenance-window extraction, reconciliation and classification

mod classify;
mod duration;
mod parser;
mod window;

pub use classify::{classify, Classification};
pub use duration::{format_duration, DurationStyle};
pub use parser::parse_announcement;
pub use window::{reconcile, supersedes, MaintenanceWindow, WindowError};

mod summary;
pub mod views;

pub use summary::{professional_detail, ReportOptions, TeamReport};

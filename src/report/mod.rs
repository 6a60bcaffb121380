//! Report assembly: currency formatting, chart rendering, and the PDF document

mod charts;
mod currency;
mod document;

pub use charts::ChartSet;
pub use currency::format_inr;
pub use document::{generate_report, DEFAULT_REPORT_PATH};

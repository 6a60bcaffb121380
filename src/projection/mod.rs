//! Month-by-month revenue projection

mod engine;
mod rows;

pub use engine::{ConversionRates, ProjectionConfig, ProjectionEngine};
pub use rows::{MonthlyProjection, ProjectionSummary, ProjectionTable};

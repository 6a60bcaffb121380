//! SmartBudget financial model
//!
//! This library provides:
//! - Development cost estimation with inflation scaling
//! - Month-by-month revenue projections from tier conversion rates
//! - Subscription plan and revenue stream reference data
//! - PDF report assembly with embedded charts

pub mod costs;
pub mod error;
pub mod plans;
pub mod projection;
pub mod report;

// Re-export commonly used types
pub use costs::{estimate_costs, CostLineItem, CostSummary};
pub use error::ModelError;
pub use plans::{subscription_plans, Price, SubscriptionPlan, REVENUE_STREAMS};
pub use projection::{ConversionRates, MonthlyProjection, ProjectionConfig, ProjectionEngine, ProjectionTable};
pub use report::generate_report;

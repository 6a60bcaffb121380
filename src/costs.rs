//! Development cost estimation
//!
//! Seven fixed cost components for building the product, each with a min/max
//! range. `estimate_costs` scales the ranges by an inflation factor and
//! aggregates totals for the report.

use crate::error::{require_finite, ModelError};
use serde::{Deserialize, Serialize};

/// Component name, min cost, max cost (INR)
const COST_COMPONENTS: [(&str, f64, f64); 7] = [
    ("UI/UX Design", 30_000.0, 60_000.0),
    ("Frontend Development (React)", 70_000.0, 100_000.0),
    ("Backend Development (Node.js + DB)", 100_000.0, 150_000.0),
    ("AI & Analytics Integration", 60_000.0, 100_000.0),
    ("Cloud Deployment (1st Year)", 20_000.0, 40_000.0),
    ("QA, Testing & Security", 30_000.0, 50_000.0),
    ("Documentation & Presentation", 10_000.0, 20_000.0),
];

/// One named component of the development cost estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostLineItem {
    pub name: String,
    pub min_cost: f64,
    pub max_cost: f64,
    /// Midpoint of the scaled range
    pub avg_cost: f64,
}

impl CostLineItem {
    fn new(name: &str, min_cost: f64, max_cost: f64) -> Self {
        Self {
            name: name.to_string(),
            min_cost,
            max_cost,
            avg_cost: (min_cost + max_cost) / 2.0,
        }
    }
}

/// Read-only cost estimate: every line item plus aggregate totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostSummary {
    pub items: Vec<CostLineItem>,
    pub total_min: f64,
    pub total_max: f64,
    pub total_avg: f64,
}

/// Estimate development costs, scaling each component range by
/// `inflation_factor` and recomputing the average as the range midpoint.
///
/// The factor must be finite. Non-positive factors are not rejected; they
/// produce correspondingly degenerate costs.
pub fn estimate_costs(inflation_factor: f64) -> Result<CostSummary, ModelError> {
    require_finite("inflation_factor", inflation_factor)?;

    let items: Vec<CostLineItem> = COST_COMPONENTS
        .iter()
        .map(|&(name, min, max)| {
            CostLineItem::new(name, min * inflation_factor, max * inflation_factor)
        })
        .collect();

    let total_min = items.iter().map(|i| i.min_cost).sum();
    let total_max = items.iter().map(|i| i.max_cost).sum();
    let total_avg = items.iter().map(|i| i.avg_cost).sum();

    Ok(CostSummary {
        items,
        total_min,
        total_max,
        total_avg,
    })
}

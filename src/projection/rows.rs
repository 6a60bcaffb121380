//! Projection output structures

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Projected metrics for one simulated month
///
/// User counts are fractional expected values, not head counts. The month's
/// figures use the pre-growth user base; growth is applied when deriving the
/// next month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyProjection {
    /// Simulated month (1-indexed)
    pub month: u32,
    pub total_users: f64,
    pub smart_users: f64,
    pub pro_users: f64,
    pub group_users: f64,
    pub subscription_revenue: f64,
    pub ad_revenue: f64,
    pub affiliate_revenue: f64,
    pub consulting_revenue: f64,
    /// Sum of the four revenue components
    pub total_revenue: f64,
}

/// Ordered sequence of monthly projections, rebuilt on every engine run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionTable {
    pub rows: Vec<MonthlyProjection>,
}

impl ProjectionTable {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, row: MonthlyProjection) {
        self.rows.push(row);
    }

    /// Get summary statistics across the projection horizon
    pub fn summary(&self) -> ProjectionSummary {
        let total_revenue: f64 = self.rows.iter().map(|r| r.total_revenue).sum();
        let total_subscription_revenue: f64 =
            self.rows.iter().map(|r| r.subscription_revenue).sum();

        let final_users = self.rows.last().map(|r| r.total_users).unwrap_or(0.0);
        let peak_monthly_revenue = self
            .rows
            .iter()
            .map(|r| r.total_revenue)
            .fold(0.0_f64, f64::max);

        ProjectionSummary {
            months: self.rows.len() as u32,
            total_revenue,
            total_subscription_revenue,
            final_users,
            peak_monthly_revenue,
        }
    }

    /// Write the table to a CSV file, one row per month
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), ModelError> {
        let path = path.as_ref();
        let mut writer =
            csv::Writer::from_path(path).map_err(|e| csv_to_model_error(path, e))?;
        for row in &self.rows {
            writer
                .serialize(row)
                .map_err(|e| csv_to_model_error(path, e))?;
        }
        writer.flush().map_err(|e| ModelError::io(path, e))?;
        Ok(())
    }
}

impl Default for ProjectionTable {
    fn default() -> Self {
        Self::new()
    }
}

fn csv_to_model_error(path: &Path, err: csv::Error) -> ModelError {
    match err.into_kind() {
        csv::ErrorKind::Io(io) => ModelError::io(path, io),
        other => ModelError::Document(format!("CSV write failed: {:?}", other)),
    }
}

/// Summary statistics for a projection run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub months: u32,
    pub total_revenue: f64,
    pub total_subscription_revenue: f64,
    pub final_users: f64,
    pub peak_monthly_revenue: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{ProjectionConfig, ProjectionEngine};
    use approx::assert_relative_eq;

    #[test]
    fn test_summary_aggregates() {
        let table = ProjectionEngine::new(ProjectionConfig::default())
            .project()
            .unwrap();
        let summary = table.summary();

        assert_eq!(summary.months, 12);
        let expected: f64 = table.rows.iter().map(|r| r.total_revenue).sum();
        assert_relative_eq!(summary.total_revenue, expected);
        // Revenue grows with users, so the peak is the last month
        assert_relative_eq!(
            summary.peak_monthly_revenue,
            table.rows.last().unwrap().total_revenue
        );
    }

    #[test]
    fn test_empty_table_summary() {
        let summary = ProjectionTable::new().summary();
        assert_eq!(summary.months, 0);
        assert_relative_eq!(summary.final_users, 0.0);
    }

    #[test]
    fn test_write_csv_round_trips() {
        let table = ProjectionEngine::new(ProjectionConfig::default())
            .project()
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projections.csv");
        table.write_csv(&path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<MonthlyProjection> =
            reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].month, 1);
        assert_relative_eq!(rows[0].total_users, 1000.0);
    }
}

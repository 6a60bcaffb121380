//! Intermediate chart rendering
//!
//! Charts are written as SVG files into a temporary directory owned by the
//! `ChartSet`. The directory is removed when the set is dropped, so a failure
//! anywhere in report assembly never leaks chart files.

use crate::costs::CostSummary;
use crate::error::ModelError;
use crate::projection::ProjectionTable;
use plotters::prelude::*;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const CHART_SIZE: (u32, u32) = (640, 480);

/// The two rendered chart files plus the temporary directory that owns them
pub struct ChartSet {
    dir: TempDir,
    cost_breakdown: PathBuf,
    revenue_growth: PathBuf,
}

impl ChartSet {
    /// Render both report charts into a fresh temporary directory
    pub fn render(costs: &CostSummary, table: &ProjectionTable) -> Result<Self, ModelError> {
        let dir = tempfile::tempdir()
            .map_err(|e| ModelError::io(std::env::temp_dir(), e))?;

        let cost_breakdown = dir.path().join("cost_breakdown.svg");
        render_cost_breakdown(costs, &cost_breakdown)?;

        let revenue_growth = dir.path().join("revenue_growth.svg");
        render_revenue_growth(table, &revenue_growth)?;

        log::debug!("rendered charts under {}", dir.path().display());
        Ok(Self {
            dir,
            cost_breakdown,
            revenue_growth,
        })
    }

    pub fn cost_breakdown(&self) -> &Path {
        &self.cost_breakdown
    }

    pub fn revenue_growth(&self) -> &Path {
        &self.revenue_growth
    }

    /// Remove the chart files now, surfacing any cleanup error
    ///
    /// Dropping the set removes them as well, but silently.
    pub fn close(self) -> Result<(), ModelError> {
        let path = self.dir.path().to_path_buf();
        self.dir.close().map_err(|e| ModelError::io(path, e))
    }
}

fn render_err<E: Display>(err: E) -> ModelError {
    ModelError::Render(err.to_string())
}

/// Proportional breakdown of average cost per component, one slice per item
fn render_cost_breakdown(costs: &CostSummary, path: &Path) -> Result<(), ModelError> {
    if costs.total_avg <= 0.0 {
        return Err(ModelError::Render(
            "cost breakdown needs a positive total average cost".to_string(),
        ));
    }

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;
    root.draw(&Text::new(
        "Average Development Cost Breakdown",
        (140, 10),
        ("sans-serif", 24),
    ))
    .map_err(render_err)?;

    let (cx, cy, radius) = (320.0_f64, 260.0_f64, 150.0_f64);
    let mut angle = -std::f64::consts::FRAC_PI_2;

    for (idx, item) in costs.items.iter().enumerate() {
        let share = item.avg_cost / costs.total_avg;
        let sweep = share * std::f64::consts::TAU;

        // Slice as a filled polygon fanning out from the center
        let steps = ((sweep.to_degrees()).ceil() as usize).max(2);
        let mut points = vec![(cx as i32, cy as i32)];
        for s in 0..=steps {
            let a = angle + sweep * s as f64 / steps as f64;
            points.push((
                (cx + radius * a.cos()).round() as i32,
                (cy + radius * a.sin()).round() as i32,
            ));
        }
        let color = Palette99::pick(idx);
        root.draw(&Polygon::new(points, color.filled()))
            .map_err(render_err)?;

        // Label outside the slice midpoint
        let mid = angle + sweep / 2.0;
        let lx = cx + (radius + 12.0) * mid.cos();
        let ly = cy + (radius + 12.0) * mid.sin();
        let label = format!("{} ({:.1}%)", item.name, share * 100.0);
        let anchored_x = if mid.cos() < 0.0 {
            lx as i32 - (label.len() as i32 * 6)
        } else {
            lx as i32
        };
        root.draw(&Text::new(label, (anchored_x, ly as i32), ("sans-serif", 13)))
            .map_err(render_err)?;

        angle += sweep;
    }

    root.present().map_err(render_err)
}

/// Total and subscription revenue against month index
fn render_revenue_growth(table: &ProjectionTable, path: &Path) -> Result<(), ModelError> {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let months = table.rows.len().max(2) as u32;
    let max_revenue = table
        .rows
        .iter()
        .map(|r| r.total_revenue)
        .fold(1.0_f64, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption("Projected Revenue Growth", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(1u32..months + 1, 0.0..max_revenue * 1.05)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Month")
        .y_desc("Revenue (INR)")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            table.rows.iter().map(|r| (r.month, r.total_revenue)),
            &BLUE,
        ))
        .map_err(render_err)?
        .label("Total Revenue")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(LineSeries::new(
            table.rows.iter().map(|r| (r.month, r.subscription_revenue)),
            &RED,
        ))
        .map_err(render_err)?
        .label("Subscription Revenue")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .position(SeriesLabelPosition::UpperLeft)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::costs::estimate_costs;
    use crate::projection::{ProjectionConfig, ProjectionEngine};

    fn default_inputs() -> (CostSummary, ProjectionTable) {
        let costs = estimate_costs(1.0).unwrap();
        let table = ProjectionEngine::new(ProjectionConfig::default())
            .project()
            .unwrap();
        (costs, table)
    }

    #[test]
    fn test_render_produces_both_charts() {
        let (costs, table) = default_inputs();
        let charts = ChartSet::render(&costs, &table).unwrap();

        assert!(charts.cost_breakdown().exists());
        assert!(charts.revenue_growth().exists());
        assert!(std::fs::metadata(charts.cost_breakdown()).unwrap().len() > 0);
        assert!(std::fs::metadata(charts.revenue_growth()).unwrap().len() > 0);
    }

    #[test]
    fn test_drop_removes_chart_files() {
        let (costs, table) = default_inputs();
        let charts = ChartSet::render(&costs, &table).unwrap();

        let dir = charts.dir.path().to_path_buf();
        let cost_path = charts.cost_breakdown().to_path_buf();
        drop(charts);

        assert!(!cost_path.exists());
        assert!(!dir.exists());
    }

    #[test]
    fn test_close_removes_chart_files() {
        let (costs, table) = default_inputs();
        let charts = ChartSet::render(&costs, &table).unwrap();

        let dir = charts.dir.path().to_path_buf();
        charts.close().unwrap();
        assert!(!dir.exists());
    }

    #[test]
    fn test_degenerate_costs_rejected() {
        let costs = estimate_costs(0.0).unwrap();
        let table = ProjectionEngine::new(ProjectionConfig::default())
            .project()
            .unwrap();
        assert!(matches!(
            ChartSet::render(&costs, &table),
            Err(ModelError::Render(_))
        ));
    }
}

//! PDF report assembly
//!
//! Lays out the two-page financial model report: cost estimation on page one,
//! revenue model on page two, with the rendered charts embedded. Chart files
//! live in a `ChartSet`-owned temporary directory and are removed on every
//! exit path.

use super::charts::ChartSet;
use super::currency::format_inr;
use crate::costs::{estimate_costs, CostSummary};
use crate::error::ModelError;
use crate::plans::{subscription_plans, REVENUE_STREAMS};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionTable};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb, Svg, SvgTransform,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Default location of the generated report
pub const DEFAULT_REPORT_PATH: &str = "SmartBudget_Report.pdf";

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;

/// Loaded regular and bold faces
struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Generate the full financial model report at `output_path`
///
/// Runs the cost estimator and projection engine with default parameters,
/// renders both charts, assembles the PDF, and returns the written path.
pub fn generate_report<P: AsRef<Path>>(output_path: P) -> Result<PathBuf, ModelError> {
    let output_path = output_path.as_ref();

    let costs = estimate_costs(1.0)?;
    let table = ProjectionEngine::new(ProjectionConfig::default()).project()?;
    log::info!(
        "assembling report: cost range {} - {}, {} projected months",
        format_inr(costs.total_min),
        format_inr(costs.total_max),
        table.rows.len()
    );

    // If anything below fails, dropping `charts` still removes the temp files
    let charts = ChartSet::render(&costs, &table)?;
    let doc = assemble_document(&costs, &table, &charts)?;

    let file = File::create(output_path).map_err(|e| ModelError::io(output_path, e))?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| ModelError::Document(e.to_string()))?;

    charts.close()?;
    log::info!("report written to {}", output_path.display());
    Ok(output_path.to_path_buf())
}

fn assemble_document(
    costs: &CostSummary,
    table: &ProjectionTable,
    charts: &ChartSet,
) -> Result<PdfDocumentReference, ModelError> {
    let (doc, page1, layer1) = PdfDocument::new(
        "SmartBudget - Financial Model Report",
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );

    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ModelError::Document(e.to_string()))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ModelError::Document(e.to_string()))?,
    };

    let layer = doc.get_page(page1).get_layer(layer1);
    write_cost_page(&layer, &fonts, costs, charts)?;

    let (page2, layer2) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
    let layer = doc.get_page(page2).get_layer(layer2);
    write_revenue_page(&layer, &fonts, table, charts)?;

    Ok(doc)
}

/// Page 1: title, cost range, bordered cost table, breakdown chart
fn write_cost_page(
    layer: &PdfLayerReference,
    fonts: &Fonts,
    costs: &CostSummary,
    charts: &ChartSet,
) -> Result<(), ModelError> {
    layer.use_text(
        "SmartBudget - Financial Model Report",
        16.0,
        Mm(48.0),
        Mm(PAGE_HEIGHT - 20.0),
        &fonts.bold,
    );

    layer.use_text(
        "1. Development Cost Estimation",
        14.0,
        Mm(MARGIN),
        Mm(PAGE_HEIGHT - 35.0),
        &fonts.bold,
    );

    let range_text = format!(
        "Total Development Cost Range: {} - {}",
        format_inr(costs.total_min),
        format_inr(costs.total_max)
    );
    layer.use_text(range_text, 12.0, Mm(MARGIN), Mm(PAGE_HEIGHT - 44.0), &fonts.regular);

    // Bordered three-column table: component, min cost, max cost
    let col_widths = [100.0, 40.0, 40.0];
    let row_height = 9.0;
    let mut y = PAGE_HEIGHT - 54.0;

    draw_table_row(
        layer,
        &fonts.bold,
        y,
        row_height,
        &col_widths,
        ["Component", "Min Cost", "Max Cost"],
    );
    y -= row_height;

    for item in &costs.items {
        draw_table_row(
            layer,
            &fonts.regular,
            y,
            row_height,
            &col_widths,
            [
                item.name.as_str(),
                &format_inr(item.min_cost),
                &format_inr(item.max_cost),
            ],
        );
        y -= row_height;
    }

    embed_chart(layer, charts.cost_breakdown(), Mm(30.0), Mm(25.0))?;
    Ok(())
}

/// Page 2: subscription plans, revenue streams, projection chart
fn write_revenue_page(
    layer: &PdfLayerReference,
    fonts: &Fonts,
    table: &ProjectionTable,
    charts: &ChartSet,
) -> Result<(), ModelError> {
    layer.use_text(
        "2. Revenue Model",
        14.0,
        Mm(MARGIN),
        Mm(PAGE_HEIGHT - 20.0),
        &fonts.bold,
    );

    let mut y = PAGE_HEIGHT - 30.0;
    layer.use_text("Subscription Plans:", 12.0, Mm(MARGIN), Mm(y), &fonts.bold);
    y -= 8.0;

    for plan in subscription_plans() {
        // Price enum is matched through Display: fixed amounts are formatted
        // as currency, custom pricing prints as "Custom"
        let pricing = format!("{}: {}/month or {}/year", plan.name, plan.monthly, plan.yearly);
        layer.use_text(pricing, 11.0, Mm(MARGIN), Mm(y), &fonts.regular);
        y -= 6.0;
        let features = format!("Features: {}", plan.features);
        layer.use_text(features, 10.0, Mm(MARGIN + 4.0), Mm(y), &fonts.regular);
        y -= 8.0;
    }

    y -= 4.0;
    layer.use_text("Revenue Streams:", 12.0, Mm(MARGIN), Mm(y), &fonts.bold);
    y -= 7.0;
    for stream in REVENUE_STREAMS {
        layer.use_text(format!("- {}", stream), 11.0, Mm(MARGIN), Mm(y), &fonts.regular);
        y -= 6.0;
    }

    y -= 5.0;
    let heading = format!("{}-Month Revenue Projections:", table.rows.len());
    layer.use_text(heading, 12.0, Mm(MARGIN), Mm(y), &fonts.bold);

    embed_chart(layer, charts.revenue_growth(), Mm(30.0), Mm(15.0))?;
    Ok(())
}

/// Draw one bordered table row with text in each cell
fn draw_table_row(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    top: f32,
    height: f32,
    widths: &[f32; 3],
    cells: [&str; 3],
) {
    layer.set_outline_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    layer.set_outline_thickness(0.4);

    let mut x = MARGIN;
    for (width, text) in widths.iter().zip(cells) {
        let border = Line {
            points: vec![
                (Point::new(Mm(x), Mm(top)), false),
                (Point::new(Mm(x + width), Mm(top)), false),
                (Point::new(Mm(x + width), Mm(top - height)), false),
                (Point::new(Mm(x), Mm(top - height)), false),
            ],
            is_closed: true,
        };
        layer.add_line(border);
        layer.use_text(text, 10.0, Mm(x + 2.0), Mm(top - height + 3.0), font);
        x += width;
    }
}

/// Parse a rendered SVG chart and place it on the layer
fn embed_chart(
    layer: &PdfLayerReference,
    chart_path: &Path,
    x: Mm,
    y: Mm,
) -> Result<(), ModelError> {
    let markup =
        std::fs::read_to_string(chart_path).map_err(|e| ModelError::io(chart_path, e))?;
    let svg = Svg::parse(&markup)
        .map_err(|e| ModelError::Render(format!("{}: {}", chart_path.display(), e)))?;

    let xobject = svg.into_xobject(layer);
    xobject.add_to_layer(
        layer,
        SvgTransform {
            translate_x: Some(x.into()),
            translate_y: Some(y.into()),
            scale_x: Some(0.9),
            scale_y: Some(0.9),
            ..Default::default()
        },
    );
    Ok(())
}

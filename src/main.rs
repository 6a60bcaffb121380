//! SmartBudget financial model CLI
//!
//! Runs cost estimation, revenue projections, and full report generation.
//! With no subcommand it reproduces the default end-to-end flow: print the
//! cost range, preview the projection, and write the PDF report.

use anyhow::Context;
use clap::{Parser, Subcommand};
use smartbudget_model::projection::{ProjectionConfig, ProjectionEngine};
use smartbudget_model::report::{generate_report, DEFAULT_REPORT_PATH};
use smartbudget_model::{estimate_costs, report};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "smartbudget_model", version, about = "SmartBudget financial model")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the full PDF report
    Report {
        /// Output path for the PDF
        #[arg(long, default_value = DEFAULT_REPORT_PATH)]
        output: PathBuf,
    },

    /// Print development cost estimates
    Costs {
        /// Inflation factor applied to every component range
        #[arg(long, default_value_t = 1.0)]
        inflation: f64,
    },

    /// Run the revenue projection and print the table
    Project {
        /// Number of months to project
        #[arg(long, default_value_t = 12)]
        months: u32,

        /// User base at the start of month 1
        #[arg(long, default_value_t = 1000.0)]
        starting_users: f64,

        /// Compounding monthly user growth rate
        #[arg(long, default_value_t = 0.05)]
        growth_rate: f64,

        /// Print the table as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Also write the table to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Report { output }) => run_report(output),
        Some(Command::Costs { inflation }) => run_costs(inflation),
        Some(Command::Project {
            months,
            starting_users,
            growth_rate,
            json,
            csv,
        }) => run_project(months, starting_users, growth_rate, json, csv),
        None => run_default(),
    }
}

/// Default flow: cost range, three-month preview, full report
fn run_default() -> anyhow::Result<()> {
    let costs = estimate_costs(1.0)?;
    println!(
        "Total Development Cost Range: {} - {}",
        report::format_inr(costs.total_min),
        report::format_inr(costs.total_max)
    );

    let table = ProjectionEngine::new(ProjectionConfig::default()).project()?;
    println!("\nFirst 3 months revenue projections:");
    print_table_header();
    for row in table.rows.iter().take(3) {
        print_table_row(row);
    }

    let path = generate_report(DEFAULT_REPORT_PATH)?;
    println!("\nReport generated at: {}", path.display());
    Ok(())
}

fn run_report(output: PathBuf) -> anyhow::Result<()> {
    let path = generate_report(&output)
        .with_context(|| format!("generating report at {}", output.display()))?;
    println!("Report generated at: {}", path.display());
    Ok(())
}

fn run_costs(inflation: f64) -> anyhow::Result<()> {
    let costs = estimate_costs(inflation)?;

    println!("Development Cost Estimates (inflation factor {})", inflation);
    println!("{:<40} {:>16} {:>16} {:>16}", "Component", "Min", "Max", "Avg");
    println!("{}", "-".repeat(92));
    for item in &costs.items {
        println!(
            "{:<40} {:>16} {:>16} {:>16}",
            item.name,
            report::format_inr(item.min_cost),
            report::format_inr(item.max_cost),
            report::format_inr(item.avg_cost),
        );
    }
    println!("{}", "-".repeat(92));
    println!(
        "{:<40} {:>16} {:>16} {:>16}",
        "Total",
        report::format_inr(costs.total_min),
        report::format_inr(costs.total_max),
        report::format_inr(costs.total_avg),
    );
    Ok(())
}

fn run_project(
    months: u32,
    starting_users: f64,
    growth_rate: f64,
    json: bool,
    csv: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = ProjectionConfig {
        months,
        starting_users,
        growth_rate,
        ..Default::default()
    };
    let table = ProjectionEngine::new(config).project()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        print_table_header();
        for row in &table.rows {
            print_table_row(row);
        }

        let summary = table.summary();
        println!("\nSummary:");
        println!("  Months: {}", summary.months);
        println!("  Final Users: {:.2}", summary.final_users);
        println!(
            "  Total Revenue: {}",
            report::format_inr(summary.total_revenue)
        );
        println!(
            "  Subscription Revenue: {}",
            report::format_inr(summary.total_subscription_revenue)
        );
        println!(
            "  Peak Monthly Revenue: {}",
            report::format_inr(summary.peak_monthly_revenue)
        );
    }

    if let Some(csv_path) = csv {
        table.write_csv(&csv_path)?;
        println!("\nFull table written to: {}", csv_path.display());
    }
    Ok(())
}

fn print_table_header() {
    println!(
        "{:>5} {:>12} {:>10} {:>10} {:>10} {:>14} {:>14}",
        "Month", "Users", "Smart", "Pro", "Group", "Subscription", "Total"
    );
    println!("{}", "-".repeat(82));
}

fn print_table_row(row: &smartbudget_model::MonthlyProjection) {
    println!(
        "{:>5} {:>12.2} {:>10.2} {:>10.2} {:>10.2} {:>14.2} {:>14.2}",
        row.month,
        row.total_users,
        row.smart_users,
        row.pro_users,
        row.group_users,
        row.subscription_revenue,
        row.total_revenue,
    );
}
